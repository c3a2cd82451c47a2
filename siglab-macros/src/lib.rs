use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Creates a `Signal` at compile time from a string literal.
///
/// This macro parses the sample list at compile time and generates
/// the corresponding `Signal::from_parts()` call with the computed
/// offset, so malformed literals become compile errors instead of
/// runtime surprises.
///
/// # Format
///
/// Whitespace-separated decimal samples. Wrapping one sample in square
/// brackets marks it as logical index 0; without brackets the first
/// sample is index 0 (offset 0). At most one sample may be bracketed.
///
/// # Examples
///
/// ```ignore
/// use siglab::signal;
///
/// // Offset 1: the -1 sample sits at logical index 0
/// let s = signal!("3 [-1] 2 5");
///
/// // Offset 0 by default
/// let s = signal!("1 0 0.5");
///
/// // The empty signal
/// let s = signal!("");
/// ```
#[proc_macro]
pub fn signal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let signal_str = input.value();

    // Parse the sample list at compile time
    match parse_signal(&signal_str) {
        Ok((samples, offset)) => {
            let expanded = quote! {
                siglab::Signal::from_parts(
                    ::std::vec![#(#samples),*],
                    #offset,
                )
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid signal string '{}': {}", signal_str, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn parse_sample(token: &str) -> Result<f64, String> {
    let value = token
        .parse::<f64>()
        .map_err(|_| format!("invalid sample '{}'", token))?;

    if !value.is_finite() {
        return Err(format!("non-finite sample '{}'", token));
    }

    Ok(value)
}

fn parse_signal(s: &str) -> Result<(Vec<f64>, isize), String> {
    let mut samples = Vec::new();
    let mut offset = None;

    for token in s.split_whitespace() {
        let (token, bracketed) = match token.strip_prefix('[') {
            Some(inner) => {
                let inner = inner
                    .strip_suffix(']')
                    .ok_or_else(|| format!("unclosed bracket in '{}'", token))?;
                (inner, true)
            }
            None => (token, false),
        };

        if bracketed {
            if offset.is_some() {
                return Err("more than one bracketed sample".to_string());
            }
            offset = Some(samples.len() as isize);
        }

        samples.push(parse_sample(token)?);
    }

    // No bracket marks the first sample as logical index 0
    Ok((samples, offset.unwrap_or(0)))
}
