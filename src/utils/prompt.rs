use crate::utils::error::{Result, ScrubError};
use std::io::{BufRead, Write};
use std::path::Path;

/// Writes `label`, then reads one answer line and returns it trimmed.
///
/// End of input before an answer is an [`ScrubError::InputError`].
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", label)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(ScrubError::InputError {
            message: format!("no answer given for '{}'", label.trim_end_matches([' ', ':', '\t'])),
        });
    }

    Ok(answer.trim().to_string())
}

/// Source and destination paths, taken from flags where given and asked for
/// otherwise. The working directory is shown only when a prompt follows.
pub fn resolve_paths<R, W>(
    input_flag: Option<&str>,
    output_flag: Option<&str>,
    working_dir: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<(String, String)>
where
    R: BufRead,
    W: Write,
{
    if input_flag.is_none() || output_flag.is_none() {
        writeln!(output, "Current directory\t: {}", working_dir.display())?;
    }

    let source = match input_flag {
        Some(path) => path.trim().to_string(),
        None => prompt_line(input, output, "Input file path\t\t: ")?,
    };
    let destination = match output_flag {
        Some(path) => path.trim().to_string(),
        None => prompt_line(input, output, "Output file path\t: ")?,
    };

    Ok((source, destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_answer() {
        let mut input = Cursor::new("  notes/raw.txt \t\n");
        let mut output = Vec::new();

        let answer = prompt_line(&mut input, &mut output, "Input file path\t\t: ").unwrap();

        assert_eq!(answer, "notes/raw.txt");
        assert_eq!(String::from_utf8(output).unwrap(), "Input file path\t\t: ");
    }

    #[test]
    fn test_prompt_reads_successive_answers() {
        let mut input = Cursor::new("in.txt\nout.txt\n");
        let mut output = Vec::new();

        let first = prompt_line(&mut input, &mut output, "in: ").unwrap();
        let second = prompt_line(&mut input, &mut output, "out: ").unwrap();

        assert_eq!((first.as_str(), second.as_str()), ("in.txt", "out.txt"));
    }

    #[test]
    fn test_prompt_at_end_of_input_fails() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt_line(&mut input, &mut output, "Output file path\t: ").unwrap_err();

        assert!(matches!(err, ScrubError::InputError { .. }));
        assert!(err.to_string().contains("Output file path"));
    }

    #[test]
    fn test_resolve_paths_with_both_flags_never_prompts() {
        let mut input = Cursor::new("unused\n");
        let mut output = Vec::new();

        let paths = resolve_paths(
            Some(" in.txt "),
            Some("\tout.txt\n"),
            Path::new("/work"),
            &mut input,
            &mut output,
        )
        .unwrap();

        assert_eq!(paths, ("in.txt".to_string(), "out.txt".to_string()));
        assert!(output.is_empty());
    }

    #[test]
    fn test_resolve_paths_prompts_only_for_missing_flag() {
        let mut input = Cursor::new("  answer.txt \n");
        let mut output = Vec::new();

        let paths = resolve_paths(
            Some("in.txt"),
            None,
            Path::new("/work"),
            &mut input,
            &mut output,
        )
        .unwrap();

        assert_eq!(paths, ("in.txt".to_string(), "answer.txt".to_string()));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Current directory\t: /work\nOutput file path\t: "
        );
    }

    #[test]
    fn test_resolve_paths_without_flags_prompts_for_both() {
        let mut input = Cursor::new("raw.txt\n clean.txt\n");
        let mut output = Vec::new();

        let paths =
            resolve_paths(None, None, Path::new("/work"), &mut input, &mut output).unwrap();

        assert_eq!(paths, ("raw.txt".to_string(), "clean.txt".to_string()));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Current directory\t: /work\nInput file path\t\t: Output file path\t: "
        );
    }

    #[test]
    fn test_resolve_paths_fails_when_input_closes_early() {
        let mut input = Cursor::new("raw.txt\n");
        let mut output = Vec::new();

        let err = resolve_paths(None, None, Path::new("/work"), &mut input, &mut output)
            .unwrap_err();

        assert!(matches!(err, ScrubError::InputError { .. }));
    }
}
