use crate::{error::ParseError, locate::Locator};

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/*
    Split a normalized launch string into (executable, arguments), analogous to how CreateProcess works.

    A leading quote is trusted: whatever sits between the quotes is the executable, found or not.
    Unquoted strings are ambiguous, "C:\Program Files\My Application\app.exe --flag" is tried as:
        C:\Program
        C:\Program Files\My
        C:\Program Files\My Application\app.exe
    and the first prefix the locator can find wins.
*/
pub fn split_command_line(
                    value: &str,
                    locator: &mut Locator
                ) -> Result<(String, String), ParseError>
{
    let (executable, arguments) = match value.strip_prefix('"') {
        Some(quoted) => {
            let closing = quoted.find('"').ok_or(ParseError::UnclosedQuote)?;
            (quoted[..closing].to_string(), &quoted[closing + 1..])
        }
        None => {
            let mut boundary = 0;
            loop {
                if boundary == value.len() {
                    return Err(ParseError::ExecutableNotFound(value.to_string()));
                }
                // always extend by at least one char past the previous boundary
                let start = boundary + value[boundary..].chars().next().map_or(1, char::len_utf8);
                boundary = match value[start..].find(is_blank) {
                    Some(n) => start + n,
                    None => value.len(),
                };
                if let Ok(found) = locator.locate(&value[..boundary]) {
                    let rest = if boundary < value.len() { &value[boundary + 1..] } else { "" };
                    break (found.to_string_lossy().into_owned(), rest);
                }
            }
        }
    };

    Ok((locator.clean_path(&executable), arguments.trim().to_string()))
}
