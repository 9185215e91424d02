//! Types and procedures that represents a command line argument,
//! or collections of command line arguments

use std::borrow::Cow;
use std::ops::Deref;
use std::{borrow::Borrow, ffi::OsStr};

use serde::{Deserialize, Serialize};

/// Type for represent a command line argument
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument<'a> {
    #[serde(borrow)]
    pub value: Cow<'a, str>,
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }
}

impl<'a> From<String> for Argument<'a> {
    fn from(value: String) -> Argument<'a> {
        Self {
            value: Cow::Owned(value),
        }
    }
}

impl<'a> From<Cow<'a, str>> for Argument<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self { value }
    }
}

impl<'a> From<&Cow<'a, str>> for Argument<'a> {
    fn from(value: &Cow<'a, str>) -> Self {
        Self {
            value: value.clone(),
        }
    }
}

impl<'a> Deref for Argument<'a> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<'a> Borrow<str> for Argument<'a> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<'a> AsRef<OsStr> for Argument<'a> {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(self.value.as_ref())
    }
}

impl<'a> core::fmt::Display for Argument<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Strong type for represent a linear collection of [`Argument`]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arguments<'a>(#[serde(borrow)] Vec<Argument<'a>>);

impl<'a> Arguments<'a> {
    /// Extends the underlying collection from a Iterator of [`Argument`]
    pub fn extend(&mut self, iter: impl IntoIterator<Item = Argument<'a>>) {
        self.0.extend(iter);
    }
}

impl<'a> Deref for Arguments<'a> {
    type Target = [Argument<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for Arguments<'a> {
    type Item = Argument<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Arguments<'a> {
    type Item = &'b Argument<'a>;
    type IntoIter = std::slice::Iter<'b, Argument<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> FromIterator<Argument<'a>> for Arguments<'a> {
    fn from_iter<I: IntoIterator<Item = Argument<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> core::fmt::Display for Arguments<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for arg in iter {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// A program plus the arguments it must be spawned with
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine<'a> {
    #[serde(borrow)]
    pub program: Argument<'a>,
    #[serde(borrow)]
    pub args: Arguments<'a>,
}

impl<'a> CommandLine<'a> {
    /// Builds a [`CommandLine`] from a sequence whose first element is the program.
    /// Returns [`None`] for an empty sequence
    pub fn from_parts<I, T>(parts: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Argument<'a>>,
    {
        let mut parts = parts.into_iter().map(Into::into);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Returns a copy of this command line with the given arguments appended
    pub fn with_args(&self, extra: impl IntoIterator<Item = Argument<'a>>) -> Self {
        let mut cmd = self.clone();
        cmd.args.extend(extra);
        cmd
    }
}

impl<'a> core::fmt::Display for CommandLine<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_from_parts() {
        let cmd = CommandLine::from_parts(["git", "status", "--short"]).unwrap();

        assert_eq!(&*cmd.program, "git");
        assert_eq!(cmd.args.len(), 2);
        assert_eq!(cmd.to_string(), "git status --short");
    }

    #[test]
    fn test_empty_command_line_is_none() {
        let parts: [&str; 0] = [];
        assert!(CommandLine::from_parts(parts).is_none());
    }

    #[test]
    fn test_with_args_keeps_order_and_original() {
        let waf = CommandLine::from_parts(["./waf", "distclean", "configure", "build"]).unwrap();
        let invocation = waf.with_args([Argument::from("--adcs-full")]);

        assert_eq!(waf.to_string(), "./waf distclean configure build");
        assert_eq!(
            invocation.to_string(),
            "./waf distclean configure build --adcs-full"
        );
    }
}
