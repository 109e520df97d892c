use crate::report::render_summary;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use style_assessment::assessment::{
    standard_questions, AnswerKey, ChoiceIndex, DescriptionCatalog, Identity, ResponseSet,
};
use style_assessment::config::AppConfig;
use style_assessment::error::AppError;
use style_assessment::session::{AssessmentSession, PersistenceStatus, SessionError};
use style_assessment::submission::{HttpSubmissionGateway, SubmissionGateway};

const CHOICE_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Backend base URL (defaults to API_URL)
    #[arg(long)]
    pub(crate) api_url: Option<String>,
    /// Seconds to wait for the backend to acknowledge the submission
    #[arg(long)]
    pub(crate) timeout_secs: Option<u64>,
}

pub(crate) async fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let api_url = args.api_url.unwrap_or(config.client.api_url);
    let timeout = args
        .timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(config.client.timeout);

    let gateway = Arc::new(HttpSubmissionGateway::new(&api_url, timeout)?);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_wizard(
        &mut stdin.lock(),
        &mut stdout.lock(),
        gateway,
        &DescriptionCatalog::standard(),
    )
    .await?;
    Ok(())
}

/// Walks one participant through welcome, questionnaire and results.
///
/// Results are printed as soon as the answers are scored; the backend
/// acknowledgement is awaited afterwards and only adds a saved/warning line.
/// A failed save can be retried from the results screen, one attempt per "y".
pub(crate) async fn run_wizard<R, W, G>(
    input: &mut R,
    output: &mut W,
    gateway: Arc<G>,
    catalog: &DescriptionCatalog,
) -> Result<PersistenceStatus, AppError>
where
    R: BufRead,
    W: Write,
    G: SubmissionGateway + 'static,
{
    let mut session = AssessmentSession::new(Arc::new(AnswerKey::standard()));

    writeln!(output, "Communication Style Assessment")?;
    loop {
        let name = prompt(input, output, "Name: ")?;
        let company = prompt(input, output, "Company: ")?;
        match session.start(Identity::new(name, company)) {
            Ok(()) => break,
            Err(SessionError::IncompleteIdentity) => {
                writeln!(output, "{}", SessionError::IncompleteIdentity)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let questions = standard_questions();
    let mut pending: Vec<usize> = (0..questions.len()).collect();
    let mut ticket = loop {
        for index in pending {
            if let Some(choice) = ask_question(input, output, &session, index)? {
                session.answer(index, choice)?;
            }
        }

        match session.submit(gateway.clone()) {
            Ok(ticket) => break ticket,
            Err(SessionError::Unanswered { missing }) => {
                pending = missing.iter().map(|ordinal| ordinal - 1).collect();
                writeln!(output, "{}", SessionError::Unanswered { missing })?;
            }
            Err(err) => return Err(err.into()),
        }
    };

    if let Some(summary) = session.results() {
        writeln!(output)?;
        render_summary(output, summary, catalog)?;
    }
    writeln!(output, "\nSaving your results...")?;
    output.flush()?;

    loop {
        let status = ticket.outcome().await;
        session.record_persistence(status.clone());
        let Some(warning) = session.warning() else {
            writeln!(output, "Your results have been saved.")?;
            return Ok(status);
        };
        writeln!(output, "Warning: {}", warning)?;

        if !confirm(input, output, "Retry saving? [y/N]: ")? {
            return Ok(status);
        }
        writeln!(output, "Saving your results...")?;
        output.flush()?;
        ticket = session.retry_submission(gateway.clone())?;
    }
}

/// Closed input counts as "no".
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<bool> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the assessment was finished",
        ));
    }
    Ok(line.trim().to_string())
}

/// Blank input skips the question; anything other than A-D is asked again.
fn ask_question<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    session: &AssessmentSession,
    index: usize,
) -> io::Result<Option<ChoiceIndex>> {
    let questions = standard_questions();
    let question = &questions[index];
    let (answered, total) = session.progress();

    writeln!(
        output,
        "\nQuestion {} of {} ({} answered)",
        question.ordinal, total, answered
    )?;
    writeln!(output, "{}", question.text)?;
    for (letter, choice) in CHOICE_LETTERS.iter().zip(question.choices.iter()) {
        writeln!(output, "  {}) {}", letter, choice)?;
    }

    loop {
        let raw = prompt(input, output, "Answer [A-D]: ")?;
        match parse_choice(&raw) {
            Some(choice) => return Ok(choice),
            None => writeln!(output, "Please choose A, B, C or D.")?,
        }
    }
}

fn parse_choice(raw: &str) -> Option<Option<ChoiceIndex>> {
    ResponseSet::from_letters(raw)
        .ok()
        .filter(|parsed| parsed.len() == 1)
        .map(|parsed| parsed.get(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Cursor;
    use std::sync::Mutex;
    use style_assessment::submission::{GatewayError, SubmitAck, SubmitRequest};

    #[derive(Default)]
    struct RecordingGateway {
        requests: Mutex<Vec<SubmitRequest>>,
    }

    #[async_trait]
    impl SubmissionGateway for RecordingGateway {
        async fn submit(&self, request: &SubmitRequest) -> Result<SubmitAck, GatewayError> {
            self.requests
                .lock()
                .expect("gateway mutex poisoned")
                .push(request.clone());
            Ok(SubmitAck {
                success: true,
                message: None,
            })
        }
    }

    struct RejectingGateway;

    #[async_trait]
    impl SubmissionGateway for RejectingGateway {
        async fn submit(&self, _request: &SubmitRequest) -> Result<SubmitAck, GatewayError> {
            Err(GatewayError::Rejected {
                status: 500,
                body: "Failed to submit assessment.".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct FlakyGateway {
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl SubmissionGateway for FlakyGateway {
        async fn submit(&self, _request: &SubmitRequest) -> Result<SubmitAck, GatewayError> {
            let mut calls = self.calls.lock().expect("gateway mutex poisoned");
            *calls += 1;
            if *calls == 1 {
                return Err(GatewayError::Timeout(std::time::Duration::from_secs(10)));
            }
            Ok(SubmitAck {
                success: true,
                message: None,
            })
        }
    }

    fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
        let mut text = lines.join("\n");
        text.push('\n');
        Cursor::new(text.into_bytes())
    }

    #[test]
    fn parses_single_letters_only() {
        assert_eq!(parse_choice("b"), Some(Some(1)));
        assert_eq!(parse_choice(""), Some(None));
        assert_eq!(parse_choice("E"), None);
        assert_eq!(parse_choice("A,B"), None);
    }

    #[tokio::test]
    async fn reprompts_until_identity_and_answers_are_complete() {
        let mut lines = vec!["   ", "Acme", "Ada", "Acme", "z"];
        lines.extend(std::iter::repeat("A").take(17));
        lines.push("");
        lines.push("d");
        let mut input = script(&lines);
        let mut output = Vec::new();
        let gateway = Arc::new(RecordingGateway::default());

        let status = run_wizard(
            &mut input,
            &mut output,
            gateway.clone(),
            &DescriptionCatalog::standard(),
        )
        .await
        .expect("wizard completes");

        assert_eq!(status, PersistenceStatus::Saved);
        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("Please fill out both your name and company."));
        assert!(text.contains("Please choose A, B, C or D."));
        assert!(text.contains("Please answer all questions before submitting."));
        assert!(text.contains("Your dominant communication style:"));
        assert!(text.ends_with("Your results have been saved.\n"));

        let requests = gateway.requests.lock().expect("gateway mutex poisoned");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].name, "Ada");
        let letters = requests[0].responses.letters();
        assert_eq!(letters[0], "A");
        assert_eq!(letters[17], "D");
    }

    #[tokio::test]
    async fn failed_persistence_prints_warning_after_results() {
        let mut lines = vec!["Grace", "Navy"];
        lines.extend(std::iter::repeat("B").take(18));
        let mut input = script(&lines);
        let mut output = Vec::new();

        let status = run_wizard(
            &mut input,
            &mut output,
            Arc::new(RejectingGateway),
            &DescriptionCatalog::standard(),
        )
        .await
        .expect("wizard completes");

        assert!(matches!(status, PersistenceStatus::Failed { .. }));
        let text = String::from_utf8(output).expect("utf8 output");
        let results_at = text
            .find("Your dominant communication style:")
            .expect("results shown");
        let warning_at = text
            .find("Warning: There was a problem submitting your results.")
            .expect("warning shown");
        assert!(results_at < warning_at);
    }

    #[tokio::test]
    async fn accepted_retry_saves_after_a_failure() {
        let mut lines = vec!["Grace", "Navy"];
        lines.extend(std::iter::repeat("C").take(18));
        lines.push("y");
        let mut input = script(&lines);
        let mut output = Vec::new();
        let gateway = Arc::new(FlakyGateway::default());

        let status = run_wizard(
            &mut input,
            &mut output,
            gateway.clone(),
            &DescriptionCatalog::standard(),
        )
        .await
        .expect("wizard completes");

        assert_eq!(status, PersistenceStatus::Saved);
        assert_eq!(*gateway.calls.lock().expect("gateway mutex poisoned"), 2);
        let text = String::from_utf8(output).expect("utf8 output");
        let warning_at = text.find("Warning: ").expect("warning shown");
        let retry_at = text.find("Retry saving? [y/N]: ").expect("retry offered");
        assert!(warning_at < retry_at);
        assert!(text.ends_with("Your results have been saved.\n"));
    }

    #[tokio::test]
    async fn declined_retry_keeps_the_warning() {
        let mut lines = vec!["Grace", "Navy"];
        lines.extend(std::iter::repeat("C").take(18));
        lines.push("n");
        let mut input = script(&lines);
        let mut output = Vec::new();
        let gateway = Arc::new(FlakyGateway::default());

        let status = run_wizard(
            &mut input,
            &mut output,
            gateway.clone(),
            &DescriptionCatalog::standard(),
        )
        .await
        .expect("wizard completes");

        assert!(matches!(status, PersistenceStatus::Failed { .. }));
        assert_eq!(*gateway.calls.lock().expect("gateway mutex poisoned"), 1);
    }

    #[tokio::test]
    async fn closed_input_aborts_the_wizard() {
        let mut input = script(&["Ada"]);
        let mut output = Vec::new();

        let result = run_wizard(
            &mut input,
            &mut output,
            Arc::new(RecordingGateway::default()),
            &DescriptionCatalog::standard(),
        )
        .await;

        match result {
            Err(AppError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected eof error, got {other:?}"),
        }
    }
}
