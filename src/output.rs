use ndarray::ArrayView1;
use std::io::{self, Write};

/// Write a lookup result as `<token> <f1> ... <fD>`, the same layout as the
/// input file, or `<token>: not found` on a miss.
pub fn write_lookup<W: Write>(
    writer: &mut W,
    token: &str,
    vector: Option<ArrayView1<f32>>,
) -> io::Result<()> {
    match vector {
        Some(vector) => {
            write!(writer, "{}", token)?;
            for value in vector.iter() {
                write!(writer, " {}", value)?;
            }
            writeln!(writer)
        }
        None => writeln!(writer, "{}: not found", token),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_write_lookup_hit() {
        let v = arr1(&[0.4f32, -0.5, 6.0]);
        let mut out = vec![];
        write_lookup(&mut out, "cat", Some(v.view())).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "cat 0.4 -0.5 6\n");
    }

    #[test]
    fn test_write_lookup_miss() {
        let mut out = vec![];
        write_lookup(&mut out, "dog", None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "dog: not found\n");
    }
}
