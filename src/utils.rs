use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use urlencoding::decode;

/// Turn the command line argument into a filesystem path.
///
/// Editors hand us `file://` URIs as often as plain paths, so those are decoded first.
/// Only arguments that are valid UTF-8 can be URIs; anything else is used as a path
/// byte for byte. Relative paths are made absolute against the current directory and
/// then simplified with dunce (no `\\?\` prefixes on Windows). If the file does not exist we still
/// return the absolute path so the open error can name it.
pub fn resolve_input_path<S: AsRef<OsStr> + ?Sized>(source_path: &S) -> PathBuf {
    let source_path = source_path.as_ref();
    let path = match source_path.to_str().and_then(|s| s.strip_prefix("file://")) {
        Some(rest) => {
            let mut path_str =
                decode(rest).map(|s| s.into_owned()).unwrap_or_else(|_| rest.to_string());

            // file:///C:/... leaves us with /C:/...
            if cfg!(windows) && path_str.starts_with('/') && path_str.chars().nth(2) == Some(':') {
                path_str.remove(0);
            }
            PathBuf::from(path_str)
        }
        None => PathBuf::from(source_path),
    };

    let absolute = if path.is_absolute() {
        path
    } else {
        env::current_dir().unwrap_or_default().join(path)
    };

    dunce::canonicalize(&absolute).unwrap_or(absolute)
}
