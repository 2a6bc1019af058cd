//! Plain-text storage for the access token and the polling checkpoint.
//!
//! Both files are deliberately trivial so they can be edited and inspected
//! by hand: the token file holds the 32-character shared secret, the
//! checkpoint file a single decimal id. Callers combine
//! [`read_last_id`]/[`write_last_id`] with the `since_id` parameter to poll
//! incrementally.

use std::fs;
use std::path::Path;

use crate::error::WeiboError;

/// Fixed length of a stored access token.
const TOKEN_LEN: usize = 32;

/// Read the access token (first 32 characters of the file).
pub fn read_token(path: impl AsRef<Path>) -> Result<String, WeiboError> {
    let data = fs::read_to_string(path.as_ref())?;
    data.get(..TOKEN_LEN)
        .map(str::to_string)
        .ok_or_else(|| {
            WeiboError::Config(format!(
                "token file {} holds fewer than {TOKEN_LEN} characters",
                path.as_ref().display()
            ))
        })
}

/// Read the last-seen id: decimal text, surrounding whitespace ignored.
pub fn read_last_id(path: impl AsRef<Path>) -> Result<i64, WeiboError> {
    let data = fs::read_to_string(path.as_ref())?;
    data.trim()
        .parse()
        .map_err(|e| WeiboError::Parse(format!("last id in {}: {e}", path.as_ref().display())))
}

/// Write the last-seen id as decimal text (no trailing newline).
pub fn write_last_id(path: impl AsRef<Path>, id: i64) -> Result<(), WeiboError> {
    fs::write(path.as_ref(), id.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn last_id_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_id");
        write_last_id(&path, 3_521_738_904_712_301).unwrap();
        assert_eq!(read_last_id(&path).unwrap(), 3_521_738_904_712_301);
    }

    #[test]
    fn last_id_tolerates_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_id");
        fs::write(&path, "  42\n").unwrap();
        assert_eq!(read_last_id(&path).unwrap(), 42);
    }

    #[test]
    fn last_id_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_id");
        fs::write(&path, "not a number").unwrap();
        assert!(matches!(read_last_id(&path), Err(WeiboError::Parse(_))));
    }

    #[test]
    fn token_is_truncated_to_fixed_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        let mut f = fs::File::create(&path).unwrap();
        write!(f, "2.00aBcDeFgHiJkLmNoPqRsTuVwXyZ01 trailing junk").unwrap();
        assert_eq!(read_token(&path).unwrap(), "2.00aBcDeFgHiJkLmNoPqRsTuVwXyZ01");
    }

    #[test]
    fn short_token_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "too short").unwrap();
        assert!(matches!(read_token(&path), Err(WeiboError::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            read_last_id("/no/such/file"),
            Err(WeiboError::Io(_))
        ));
    }
}
