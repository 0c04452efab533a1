/// Formats a value of the selected column, keeping about six significant digits
pub fn value(n: f64) -> String {
    let n_abs = n.abs();

    if !n.is_finite() {
        format!("{}", n)
    } else if n_abs < 10.0 {
        format!("{:.5}", n)
    } else if n_abs < 100.0 {
        format!("{:.4}", n)
    } else if n_abs < 1000.0 {
        format!("{:.3}", n)
    } else if n_abs < 10000.0 {
        format!("{:.2}", n)
    } else if n_abs < 100_000.0 {
        format!("{:.1}", n)
    } else {
        format!("{:.0}", n)
    }
}

/// Shortest text that reads back as exactly `n`, in exponent notation for tiny and huge values
pub fn exact(n: f64) -> String {
    format!("{:?}", n)
}

pub fn percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 1e2)
}

/// Format a number with thousands separators.
// Based on the corresponding libtest functionality, see
// https://github.com/rust-lang/rust/blob/557359f92512ca88b62a602ebda291f17a953002/library/test/src/bench.rs#L87-L109
fn thousands_sep(mut n: u64, sep: char) -> String {
    use std::fmt::Write;
    let mut output = String::new();
    let mut trailing = false;
    for &pow in &[9, 6, 3, 0] {
        let base = 10_u64.pow(pow);
        if pow == 0 || trailing || n / base != 0 {
            // NB writing into a `String` cannot fail
            let _ = if !trailing {
                write!(output, "{}", n / base)
            } else {
                write!(output, "{:03}", n / base)
            };
            if pow != 0 {
                output.push(sep);
            }
            trailing = true;
        }
        n %= base;
    }

    output
}

/// Format a count, including thousands-separators.
pub fn integer(n: usize) -> String {
    thousands_sep(n as u64, ',')
}
