use thiserror::Error;

/// How the body of an `unwrap!` invocation is emitted after its guards.
///
/// The strategies differ in how control flow escapes from the body. With
/// [UnwrapStrategy::Inline], `return`, `break`, `continue` and `?` act on the
/// function or loop enclosing the invocation. With [UnwrapStrategy::Closure]
/// they act on the synthesized closure only, so `return` merely ends the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnwrapStrategy {
    /// Re-emit every top-level statement of the body after the guards.
    #[default]
    Inline,
    /// Emit a single statement which invokes the body as a zero-argument
    /// closure.
    Closure,
}

/// Error raised when parsing an option.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The option key is not supported.
    #[error("Unsupported option `{option}`")]
    UnsupportedOption {
        /// The option as it was passed.
        option: String,
    },
    /// The option value is not supported.
    #[error("Unsupported value `{value}` for option `{key}`")]
    UnsupportedValue {
        /// The option key.
        key: String,
        /// The unsupported value.
        value: String,
    },
}

/// Expansion options.
///
/// Options are fixed before any expansion runs and are never modified by an
/// expansion.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Strategy used to emit `unwrap!` bodies.
    pub(crate) unwrap_strategy: UnwrapStrategy,
    /// Path to the runtime crate referenced by generated code. Defaults to
    /// `::freestanding`.
    pub(crate) module: Option<syn::Path>,
}

impl Options {
    /// Set the strategy used to emit `unwrap!` bodies.
    pub fn with_unwrap_strategy(mut self, unwrap_strategy: UnwrapStrategy) -> Self {
        self.unwrap_strategy = unwrap_strategy;
        self
    }

    /// Set the path of the runtime crate referenced by generated code.
    pub fn with_module(mut self, module: syn::Path) -> Self {
        self.module = Some(module);
        self
    }

    /// The strategy used to emit `unwrap!` bodies.
    pub fn unwrap_strategy(&self) -> UnwrapStrategy {
        self.unwrap_strategy
    }

    /// Parse the given option.
    ///
    /// # Examples
    ///
    /// ```
    /// use freestanding_expand::{Options, UnwrapStrategy};
    ///
    /// let mut options = Options::default();
    /// options.parse_option("unwrap-strategy=closure")?;
    /// assert_eq!(options.unwrap_strategy(), UnwrapStrategy::Closure);
    /// # Ok::<_, freestanding_expand::ConfigurationError>(())
    /// ```
    pub fn parse_option(&mut self, option: &str) -> Result<(), ConfigurationError> {
        let mut it = option.splitn(2, '=');

        match it.next() {
            Some("unwrap-strategy") => {
                self.unwrap_strategy = match it.next() {
                    Some("inline") | None => UnwrapStrategy::Inline,
                    Some("closure") => UnwrapStrategy::Closure,
                    Some(value) => {
                        return Err(ConfigurationError::UnsupportedValue {
                            key: "unwrap-strategy".to_owned(),
                            value: value.to_owned(),
                        });
                    }
                };
            }
            _ => {
                return Err(ConfigurationError::UnsupportedOption {
                    option: option.to_owned(),
                });
            }
        }

        Ok(())
    }
}
