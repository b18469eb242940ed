use crate::infra::{load_engine, parse_reply};
use clap::Args;
use ssum_detector::analysis::{parse_answer, AnalysisEngine, AnalysisOutcome};
use ssum_detector::error::AppError;
use ssum_detector::session::{mode_from_reply, run_session, InteractionShell, SessionError};
use std::io::{self, BufRead, Write};

const BANNER: &str = "==== 썸 판별 LLM 모델 ====\n\
연애 초기의 '썸'과 '착각'을 구분하는 알고리즘에 오신 것을 환영합니다!\n\
이 모델은 데이터 기반 심리학 연구와 확장된 감정 분석, if-else 조건을 활용하여 상세한 분석 결과를 도출합니다.\n";
const MODE_PROMPT: &str = "자유 서술로 상황을 분석하시겠습니까? (자유 서술: y / 질문 방식: n): ";

#[derive(Args, Debug)]
pub(crate) struct TextArgs {
    /// Description of the situation; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub(crate) words: Vec<String>,
}

impl TextArgs {
    pub(crate) fn joined(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Comma-separated replies in question order (예/아니오, y/n, yes/no)
    #[arg(long, value_delimiter = ',', value_parser = parse_reply)]
    pub(crate) answers: Vec<bool>,
}

/// Line-oriented shell over any reader/writer pair.
pub(crate) struct ConsoleShell<R, W> {
    input: R,
    output: W,
}

impl ConsoleShell<io::StdinLock<'static>, io::Stdout> {
    pub(crate) fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleShell<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> InteractionShell for ConsoleShell<R, W> {
    fn read_free_text(&mut self, prompt: &str) -> Result<String, SessionError> {
        Ok(self.prompt_line(&format!("{prompt}\n"))?)
    }

    fn ask(&mut self, prompt: &str) -> Result<bool, SessionError> {
        let reply = self.prompt_line(&format!("{prompt} (예/아니오): "))?;
        Ok(parse_answer(&reply))
    }

    fn display(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

pub(crate) fn run_interactive() -> Result<(), AppError> {
    let engine = load_engine()?;
    let mut shell = ConsoleShell::stdio();
    interactive_session(&mut shell, &engine)?;
    Ok(())
}

pub(crate) fn interactive_session<R: BufRead, W: Write>(
    shell: &mut ConsoleShell<R, W>,
    engine: &AnalysisEngine,
) -> Result<AnalysisOutcome, SessionError> {
    shell.display(BANNER)?;
    let mode = mode_from_reply(&shell.prompt_line(MODE_PROMPT)?);
    run_session(shell, engine, mode)
}

pub(crate) fn run_text(args: TextArgs) -> Result<(), AppError> {
    let engine = load_engine()?;
    let outcome = engine.analyze_free_text(&args.joined());
    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let engine = load_engine()?;
    let outcome = engine.analyze_questionnaire(&args.answers)?;
    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let engine = load_engine()?;
    let questionnaire = engine.questionnaire();
    println!(
        "{} questions, maximum score {}",
        questionnaire.len(),
        questionnaire.max_score()
    );
    for question in questionnaire.questions() {
        println!("- {} (+{})", question.prompt, question.weight);
    }
    Ok(())
}

fn render_outcome(outcome: &AnalysisOutcome) {
    println!("{}", outcome.narrative);
    println!(
        "\nMode: {} | score {} | band {}",
        outcome.mode.label(),
        outcome.score,
        outcome.band.label()
    );
    if !outcome.positive_hits.is_empty() {
        println!("Positive markers: {}", outcome.positive_hits.join(", "));
    }
    if !outcome.ambiguous_hits.is_empty() {
        println!("Ambiguous markers: {}", outcome.ambiguous_hits.join(", "));
    }
}
