use crate::{environment::Environment, error::ParseError, mutate::starts_with_ignore_case};
use log::debug;
use regex::Regex;

const KERNEL_PREFIX: &str = "\\??\\";
const SYSTEM_ROOT_TOKEN: &str = "\\systemroot";
const SYSTEM32_TOKEN: &str = "system32";

/*
    Convert typical kernel paths to user paths and expand %VAR% references.
    Prefix stripping has to come first, a stripped path can itself start with a root token.
*/
pub fn normalize_path(
                    raw: &str,
                    env: &Environment
                ) -> Result<String, ParseError>
{
    if raw.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut value = raw.strip_prefix(KERNEL_PREFIX).unwrap_or(raw).to_string();
    // only the leading token is replaced, unlike a replace-all of the prefix text elsewhere in the string
    if starts_with_ignore_case(&value, SYSTEM_ROOT_TOKEN) {
        value = format!("{}{}", env.system_root(), &value[SYSTEM_ROOT_TOKEN.len()..]);
    }
    if starts_with_ignore_case(&value, SYSTEM32_TOKEN) {
        value = format!("{}\\System32{}", env.system_root(), &value[SYSTEM32_TOKEN.len()..]);
    }

    expand_env_vars(&value, env)
}

/*
    Replace every %NAME% with its value, unset names expand to nothing.
    Percent signs that do not open a reference are copied through as text,
    e.g. "100%", "%1" placeholders and "%%". A name holding '=' or NUL is malformed.
*/
pub fn expand_env_vars(
                    value: &str,
                    env: &Environment
                ) -> Result<String, ParseError>
{
    lazy_static! {
        // no blanks and not purely numeric ("%1" is a launch placeholder)
        static ref VAR_NAME: Regex = Regex::new(r"^[^\s%]*[^\s%0-9][^\s%]*$").expect("Invalid Regex");
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(open) = rest.find('%') {
        expanded.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = match after.find('%') {
            Some(c) => c,
            None => {
                rest = &rest[open..];
                break;
            }
        };
        let name = &after[..close];
        if !VAR_NAME.is_match(name) {
            // not a reference, the closing '%' may still open one
            expanded.push('%');
            rest = after;
            continue;
        }
        if name.contains(['=', '\0']) {
            return Err(ParseError::Expansion(value.to_string()));
        }
        match env.get(name) {
            Some(v) => expanded.push_str(v),
            None => debug!("[autorun_hunter] %{name}% is not set, expanding to empty"),
        }
        rest = &after[close + 1..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}
