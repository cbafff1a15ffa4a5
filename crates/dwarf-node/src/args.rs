//! Operator argument access.
//!
//! Chain parameter construction only reads arguments; it never cares where
//! they came from. `ArgSource` is that read surface and `ArgsManager` is the
//! in-memory implementation fed from command-line tokens.

use std::collections::BTreeMap;

pub trait ArgSource {
    /// All values given for `name` (e.g. `-vbparams`), in the order supplied.
    fn get_args(&self, name: &str) -> Vec<String>;

    /// The last value of a boolean flag, or `None` if it was never given.
    fn get_bool_arg(&self, name: &str) -> Option<bool>;

    fn is_arg_set(&self, name: &str) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ArgValue {
    Value(String),
    Negated,
}

#[derive(Clone, Debug, Default)]
pub struct ArgsManager {
    args: BTreeMap<String, Vec<ArgValue>>,
}

fn interpret_bool(v: &str) -> bool {
    match v {
        "" => true,
        _ if v.eq_ignore_ascii_case("true") => true,
        _ if v.eq_ignore_ascii_case("false") => false,
        _ => v.parse::<i64>().map(|n| n != 0).unwrap_or(false),
    }
}

impl ArgsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an argument set from `-name[=value]` tokens.
    ///
    /// A leading `--` is accepted as well as `-`. `-noname` negates `name`
    /// and clears values given before it. Tokens not starting with `-`
    /// are returned as positional arguments.
    pub fn from_tokens<I, S>(tokens: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::new();
        let mut positional = Vec::new();
        for tok in tokens {
            let tok = tok.as_ref();
            if !tok.starts_with('-') || tok == "-" {
                positional.push(tok.to_string());
                continue;
            }
            let body = tok.strip_prefix("--").unwrap_or(&tok[1..]);
            let (key, value) = match body.split_once('=') {
                Some((k, v)) => (k, v),
                None => (body, ""),
            };
            match key.strip_prefix("no") {
                Some(rest) if !rest.is_empty() && interpret_bool(value) => out.negate(rest),
                Some(rest) if !rest.is_empty() => out.push(rest, ""),
                _ => out.push(key, value),
            }
        }
        (out, positional)
    }

    fn entry(&mut self, name: &str) -> &mut Vec<ArgValue> {
        let key = name.trim_start_matches('-').to_string();
        self.args.entry(key).or_default()
    }

    /// Appends a value for `name`; repeated names accumulate.
    pub fn push(&mut self, name: &str, value: &str) {
        self.entry(name).push(ArgValue::Value(value.to_string()));
    }

    pub fn negate(&mut self, name: &str) {
        let e = self.entry(name);
        e.clear();
        e.push(ArgValue::Negated);
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.push(name, value);
        self
    }

    fn values(&self, name: &str) -> Option<&[ArgValue]> {
        self.args
            .get(name.trim_start_matches('-'))
            .map(|v| v.as_slice())
    }
}

impl ArgSource for ArgsManager {
    fn get_args(&self, name: &str) -> Vec<String> {
        self.values(name)
            .unwrap_or(&[])
            .iter()
            .filter_map(|v| match v {
                ArgValue::Value(s) => Some(s.clone()),
                ArgValue::Negated => None,
            })
            .collect()
    }

    fn get_bool_arg(&self, name: &str) -> Option<bool> {
        match self.values(name)?.last()? {
            ArgValue::Value(s) => Some(interpret_bool(s)),
            ArgValue::Negated => Some(false),
        }
    }

    fn is_arg_set(&self, name: &str) -> bool {
        self.values(name).is_some_and(|v| !v.is_empty())
    }
}

/// True when `-test=<name>` was given.
pub fn has_test_option(args: &dyn ArgSource, name: &str) -> bool {
    args.get_args("-test").iter().any(|v| v == name)
}
