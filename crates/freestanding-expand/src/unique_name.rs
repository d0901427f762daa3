use crate::context::MacroContext;
use crate::internals::UNIQUE;
use crate::invocation::Invocation;

/// Expands `unique_name!()` into a single placeholder binding using a name
/// allocated by the context.
pub(crate) struct UniqueNameMacro;

impl UniqueNameMacro {
    #[tracing::instrument(skip_all)]
    pub(crate) fn expand(
        &self,
        invocation: &Invocation,
        cx: &MacroContext,
    ) -> syn::Result<Vec<syn::Stmt>> {
        if let Some(argument) = invocation.iter().next() {
            return Err(syn::Error::new_spanned(
                argument,
                "unique_name! takes no arguments",
            ));
        }

        if let Some((arrow, _)) = &invocation.trailing {
            return Err(syn::Error::new_spanned(
                arrow,
                "unique_name! takes no arguments",
            ));
        }

        let name = cx.unique_name(UNIQUE.as_str());
        tracing::trace!(%name, "allocated");

        Ok(vec![syn::parse_quote!(let #name: () = ();)])
    }
}
