//! Host name encoding for link targets.
//!
//! Labels are encoded one at a time: ASCII labels are copied untouched
//! (case included), non-ASCII labels go through UTS #46 processing and come
//! out as `xn--` Punycode.

/// A label that could not be converted to ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdnError;

/// Encode a dot-separated host name into its ASCII form.
///
/// # Example
/// ```
/// use ferrolink::idn::encode_host;
///
/// assert_eq!(encode_host("www.c✶.ws").unwrap(), "www.xn--c-lgq.ws");
/// assert_eq!(encode_host("GitHub.com").unwrap(), "GitHub.com");
/// ```
pub fn encode_host(host: &str) -> Result<String, IdnError> {
    let mut out = String::with_capacity(host.len() + 8);
    encode_host_into(&mut out, host)?;
    Ok(out)
}

/// Encode a host name, appending to `out`.
///
/// On error `out` may hold a partial result.
pub fn encode_host_into(out: &mut String, host: &str) -> Result<(), IdnError> {
    if host.is_ascii() {
        out.push_str(host);
        return Ok(());
    }
    for (i, label) in host.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        encode_label_into(out, label)?;
    }
    Ok(())
}

fn encode_label_into(out: &mut String, label: &str) -> Result<(), IdnError> {
    if label.is_ascii() {
        out.push_str(label);
        return Ok(());
    }
    let ascii = idna::domain_to_ascii(label).map_err(|_| IdnError)?;
    // Mapping can fold a label into a dot, a space or nothing (`。`, NBSP, soft hyphens).
    if ascii.is_empty() || !ascii.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
        return Err(IdnError);
    }
    out.push_str(&ascii);
    Ok(())
}
