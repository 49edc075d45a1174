use bstr::BString;

/// Quoting policy applied by [`escape_sh_with`](crate::transform::escape_sh_with).
///
/// POSIX shells get a backslash in front of each metacharacter; the Windows
/// command line has no such escape, so the whole argument is wrapped in
/// double quotes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShellFlavor {
    /// Backslash-escape each metacharacter; newline becomes `\n`.
    Posix,
    /// Wrap the whole argument in double quotes.
    Windows,
}

impl ShellFlavor {
    /// The flavor matching the target the crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            ShellFlavor::Windows
        } else {
            ShellFlavor::Posix
        }
    }
}

impl Default for ShellFlavor {
    fn default() -> Self {
        Self::native()
    }
}

/// Limits for [`match_wildcard_with`](crate::search::match_wildcard_with).
///
/// # Default
///
/// Unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildcardOptions {
    /// Maximum number of match attempts the backtracking matcher may make.
    ///
    /// Patterns with several `*` can take exponential time on adversarial
    /// input. When the budget runs out the match is reported as failed.
    ///
    /// # Default
    ///
    /// `None`
    pub step_budget: Option<usize>,
}

/// Bundle of the tunable knobs used across the crate.
///
/// ```rust
/// use tmcodec::{ShellFlavor, TmCodecOptions, WildcardOptions};
///
/// let options = TmCodecOptions {
///     shell: ShellFlavor::Posix,
///     wildcard: WildcardOptions { step_budget: Some(10_000) },
///     ..Default::default()
/// };
/// assert_eq!(options.tab_width, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TmCodecOptions {
    /// Quoting policy for shell arguments.
    ///
    /// # Default
    ///
    /// [`ShellFlavor::native`]
    pub shell: ShellFlavor,

    /// Column multiple used when expanding tabs.
    ///
    /// # Default
    ///
    /// `8`
    pub tab_width: usize,

    /// Limits for wildcard matching.
    pub wildcard: WildcardOptions,
}

impl Default for TmCodecOptions {
    fn default() -> Self {
        Self {
            shell: ShellFlavor::native(),
            tab_width: 8,
            wildcard: WildcardOptions::default(),
        }
    }
}

impl TmCodecOptions {
    /// [`escape_sh_with`](crate::transform::escape_sh_with) using this
    /// configuration's shell flavor.
    #[must_use]
    pub fn escape_sh(&self, s: &[u8]) -> BString {
        crate::transform::escape_sh_with(s, self.shell)
    }

    /// [`convert_tabs_to_spaces`](crate::transform::convert_tabs_to_spaces)
    /// with the configured tab width.
    #[must_use]
    pub fn expand_tabs(&self, s: &[u8]) -> BString {
        crate::transform::convert_tabs_to_spaces(s, self.tab_width)
    }

    /// [`match_wildcard_with`](crate::search::match_wildcard_with) under the
    /// configured step budget.
    #[must_use]
    pub fn match_wildcard(&self, s: &[u8], pattern: &[u8]) -> bool {
        crate::search::match_wildcard_with(s, pattern, &self.wildcard)
    }
}
