use std::io::{self, BufRead};
use std::process::ExitCode;

use figx_lib::{mask_token, FigxError, TokenStore};

use crate::cli::TokenAction;
use crate::formatting::render_error;

/// Run a `token` subcommand against the default token location.
pub fn run_token(action: TokenAction) -> ExitCode {
    let result = TokenStore::default_location().and_then(|store| apply(&store, action));
    match result {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(err) => render_error(err),
    }
}

fn apply(store: &TokenStore, action: TokenAction) -> Result<String, FigxError> {
    match action {
        TokenAction::Set { token } => {
            let token = match token {
                Some(token) => token,
                None => read_token_line(io::stdin().lock())?,
            };
            store.save(&token)?;
            Ok(format!(
                "Saved token {} to {}",
                mask_token(token.trim()),
                store.path().display()
            ))
        }
        TokenAction::Show => Ok(match store.load()? {
            Some(token) => mask_token(&token),
            None => "No token stored".to_string(),
        }),
        TokenAction::Clear => Ok(if store.clear()? {
            format!("Removed {}", store.path().display())
        } else {
            "No token stored".to_string()
        }),
        TokenAction::Path => Ok(store.path().display().to_string()),
    }
}

fn read_token_line(mut reader: impl BufRead) -> Result<String, FigxError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let token = line.trim();
    if token.is_empty() {
        return Err(FigxError::Token("No token given on stdin".to_string()));
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_show_clear_cycle() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("token"));

        let saved = apply(
            &store,
            TokenAction::Set {
                token: Some("figd_1234567890".into()),
            },
        )
        .unwrap();
        assert!(saved.starts_with("Saved token figd…7890"));

        assert_eq!(apply(&store, TokenAction::Show).unwrap(), "figd…7890");
        assert!(apply(&store, TokenAction::Clear).unwrap().starts_with("Removed"));
        assert_eq!(apply(&store, TokenAction::Show).unwrap(), "No token stored");
        assert_eq!(apply(&store, TokenAction::Clear).unwrap(), "No token stored");
    }

    #[test]
    fn stdin_token_is_trimmed() {
        let token = read_token_line("  figd_abc \n".as_bytes()).unwrap();
        assert_eq!(token, "figd_abc");
        assert!(read_token_line("\n".as_bytes()).is_err());
    }
}
