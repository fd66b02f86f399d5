//! Strict placeholder composition of fragments.
//!
//! Fragments use minijinja `{{ name }}` placeholders. Composition never
//! falls back to an empty string: a placeholder without a binding is a
//! [`ComposeError::MissingBinding`], so a document with unresolved
//! placeholders can never be produced.

use minijinja::{AutoEscape, Environment, ErrorKind, Template, UndefinedBehavior, Value};
use serde::Serialize;

use crate::fragments::{Fragment, FragmentError, FragmentStore};

/// Name reported for templates composed with [`compose`].
const INLINE: &str = "<inline>";

/// Errors that can occur while composing fragments.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    MissingFragment(#[from] FragmentError),

    #[error("Fragment '{fragment}' is not a valid template: {message}")]
    InvalidFragment { fragment: String, message: String },

    #[error("Fragment '{fragment}' uses placeholder '{placeholder}' but no value is bound to it")]
    MissingBinding {
        fragment: String,
        placeholder: String,
    },

    #[error("Failed to render fragment '{fragment}': {message}")]
    Render { fragment: String, message: String },
}

/// Holds the parsed fragments of one document.
pub struct Composer {
    env: Environment<'static>,
}

impl Composer {
    /// Load every fragment from the store.
    ///
    /// All fragments are loaded before any is parsed, so a missing fragment
    /// is reported before anything else happens.
    pub fn load(store: &dyn FragmentStore) -> Result<Self, ComposeError> {
        let mut texts = Vec::with_capacity(Fragment::ALL.len());
        for fragment in Fragment::ALL {
            texts.push((fragment, store.load(fragment)?));
        }

        let mut env = strict_environment();
        for (fragment, text) in texts {
            env.add_template_owned(fragment.name(), text)
                .map_err(|e| ComposeError::InvalidFragment {
                    fragment: fragment.name().to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self { env })
    }

    /// Instantiate one fragment with the given bindings.
    pub fn compose<B: Serialize>(
        &self,
        fragment: Fragment,
        bindings: &B,
    ) -> Result<String, ComposeError> {
        let tmpl = self
            .env
            .get_template(fragment.name())
            .map_err(|_| FragmentError::Missing(fragment))?;

        render_strict(&tmpl, fragment.name(), bindings)
    }
}

/// Substitute bindings into ad-hoc template text.
pub fn compose<B: Serialize>(template_text: &str, bindings: &B) -> Result<String, ComposeError> {
    let env = strict_environment();
    let tmpl = env
        .template_from_str(template_text)
        .map_err(|e| ComposeError::InvalidFragment {
            fragment: INLINE.to_string(),
            message: e.to_string(),
        })?;

    render_strict(&tmpl, INLINE, bindings)
}

/// Environment that never escapes on its own and never tolerates undefined values.
fn strict_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env
}

fn render_strict<B: Serialize>(
    tmpl: &Template<'_, '_>,
    name: &str,
    bindings: &B,
) -> Result<String, ComposeError> {
    let ctx = Value::from_serialize(bindings);

    let mut placeholders: Vec<String> = tmpl.undeclared_variables(false).into_iter().collect();
    placeholders.sort();

    for placeholder in placeholders {
        let bound = ctx
            .get_attr(&placeholder)
            .map(|v| !v.is_undefined())
            .unwrap_or(false);
        if !bound {
            return Err(ComposeError::MissingBinding {
                fragment: name.to_string(),
                placeholder,
            });
        }
    }

    tmpl.render(ctx).map_err(|e| match e.kind() {
        ErrorKind::UndefinedError => ComposeError::MissingBinding {
            fragment: name.to_string(),
            placeholder: e.detail().unwrap_or("unknown").to_string(),
        },
        _ => ComposeError::Render {
            fragment: name.to_string(),
            message: e.to_string(),
        },
    })
}
