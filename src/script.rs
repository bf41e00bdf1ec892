//! Scripted play: a compact text form of cell clicks and history jumps.
//!
//! Tokens are separated by whitespace or commas. A number or a cell
//! label (`center`, `top-left`) selects that cell; `@N` jumps to history
//! step N.

use crate::games::tictactoe::{GameError, Position};
use crate::session::Session;
use tracing::{debug, instrument};

/// One user event in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Click on a cell index.
    Select(usize),
    /// Click on a history entry.
    Jump(usize),
}

/// Parses a script such as `"0 center 1 @2 5"`.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, GameError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let step = match token.strip_prefix('@') {
                Some(rest) => rest.parse::<usize>().map(ScriptStep::Jump),
                None => token.parse::<usize>().map(ScriptStep::Select),
            };
            step.ok()
                .or_else(|| {
                    Position::from_label_or_number(token)
                        .map(|pos| ScriptStep::Select(pos.to_index()))
                })
                .ok_or_else(|| GameError::InvalidScriptToken(token.to_string()))
        })
        .collect()
}

/// Feeds `steps` into `session` in order.
///
/// Rejected cell selections are skipped; an out-of-range jump stops the run.
#[instrument(skip(session, steps), fields(count = steps.len()))]
pub fn run_script(session: &mut Session, steps: &[ScriptStep]) -> Result<(), GameError> {
    for step in steps {
        match *step {
            ScriptStep::Select(index) => {
                let accepted = session.select_cell(index);
                debug!(index, accepted, "Scripted selection");
            }
            ScriptStep::Jump(target) => session.jump_to(target)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let steps = parse_script("0, 4 1\t@2,5").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Select(0),
                ScriptStep::Select(4),
                ScriptStep::Select(1),
                ScriptStep::Jump(2),
                ScriptStep::Select(5),
            ]
        );
    }

    #[test]
    fn test_parse_cell_labels() {
        let steps = parse_script("center @1 Top-Left,bottom-right").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Select(4),
                ScriptStep::Jump(1),
                ScriptStep::Select(0),
                ScriptStep::Select(8),
            ]
        );
        assert!(parse_script("@center").is_err());
    }

    #[test]
    fn test_parse_empty_script() {
        assert!(parse_script("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(
            parse_script("0 x"),
            Err(GameError::InvalidScriptToken("x".to_string()))
        );
        assert!(parse_script("@").is_err());
        assert!(parse_script("-1").is_err());
    }

    #[test]
    fn test_run_stops_on_bad_jump() {
        let mut session = Session::mount();
        let steps = parse_script("0 @5 4").unwrap();
        assert!(run_script(&mut session, &steps).is_err());
        assert_eq!(session.state().history().len(), 2);
    }
}
