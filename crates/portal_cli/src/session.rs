//! Scripted controller sessions: `select <id>`, `back`, `reload`.

use spotportal::controller::{Selection, ViewController};
use spotportal::game::GameId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Select(GameId),
    Back,
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepParseError {
    #[error("`select` needs a game id")]
    MissingId,
    #[error("invalid game id: {0}")]
    BadId(String),
    #[error("unknown step: {0}")]
    Unknown(String),
}

/// Parses a flat argument list like `select 2 reload back`.
pub fn parse_steps(args: &[String]) -> Result<Vec<Step>, StepParseError> {
    let mut steps = Vec::new();
    let mut it = args.iter();
    while let Some(word) = it.next() {
        match word.trim().to_ascii_lowercase().as_str() {
            "select" | "play" => {
                let raw = it.next().ok_or(StepParseError::MissingId)?;
                let id = raw
                    .trim()
                    .trim_start_matches('#')
                    .parse::<u32>()
                    .map_err(|_| StepParseError::BadId(raw.clone()))?;
                steps.push(Step::Select(GameId(id)));
            }
            "back" | "home" => steps.push(Step::Back),
            "reload" | "restart" => steps.push(Step::Reload),
            _ => return Err(StepParseError::Unknown(word.clone())),
        }
    }
    Ok(steps)
}

/// Applies `step` and describes the resulting state as one line.
pub fn run_step(view: &mut ViewController, step: Step) -> String {
    let outcome = match step {
        Step::Select(id) => view.select_by_id(id).err().map(|e| e.to_string()),
        Step::Back => {
            view.return_to_default();
            None
        }
        Step::Reload => {
            view.reload_current();
            None
        }
    };

    let label = match step {
        Step::Select(id) => format!("select {id}"),
        Step::Back => "back".to_string(),
        Step::Reload => "reload".to_string(),
    };

    match outcome {
        Some(err) => format!("{label:<12} rejected: {err}"),
        None => format!(
            "{label:<12} {:<14} gen={:<3} {}",
            describe_selection(view.selection()),
            view.frame().generation,
            view.rendered_source()
        ),
    }
}

pub fn describe_selection(selection: Selection) -> String {
    match selection {
        Selection::Default => "default".to_string(),
        Selection::Selected(id) => format!("selected {id}"),
    }
}
