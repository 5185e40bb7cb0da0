//! Format output dispatch helpers

/// Dispatch output by format when the JSON branch returns a Result and the
/// others print directly.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&set),
///     human => { println!("{}", set.count); },
///     records => { println!("H trains=1 records=1 mode=count"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
