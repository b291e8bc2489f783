//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request payloads (free-text subject fields).
/// The cut lands on a char boundary so multibyte input can't split mid-char.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max { return s.to_string(); }
  let mut cut = max;
  while !s.is_char_boundary(cut) { cut -= 1; }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn template_fills_all_occurrences() {
    let out = fill_template("{a} and {b}, then {a}", &[("a", "x"), ("b", "y")]);
    assert_eq!(out, "x and y, then x");
  }

  #[test]
  fn template_leaves_unknown_keys_alone() {
    assert_eq!(fill_template("{missing}", &[]), "{missing}");
  }

  #[test]
  fn short_strings_are_not_truncated() {
    assert_eq!(trunc_for_log("short", 64), "short");
    assert!(trunc_for_log(&"x".repeat(100), 10).contains("100 bytes total"));
  }

  #[test]
  fn truncation_backs_off_to_a_char_boundary() {
    // A two-byte char straddling the limit must not split mid-char.
    let s = format!("{}é more text", "a".repeat(63));
    let out = trunc_for_log(&s, 64);
    assert!(out.starts_with(&"a".repeat(63)));
    assert!(!out.contains('é'));
    assert!(out.contains("bytes total"));

    // Cutting exactly on the boundary keeps the whole char.
    let cjk = "日本語テキスト"; // 3 bytes per char
    let out = trunc_for_log(cjk, 6);
    assert!(out.starts_with("日本"));
  }
}
