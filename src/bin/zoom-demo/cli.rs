//! Command line options of the demo.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Document viewer zoom control demo")]
pub struct Args {
    /// Screen resolution used to convert between zoom and display scale
    #[arg(long, default_value_t = 96.0, value_parser = parse_positive)]
    pub dpi: f64,

    /// Largest display scale the document model allows
    #[arg(long, default_value_t = 64.0)]
    pub max_scale: f64,

    /// Number of pages of the demo document
    #[arg(long, default_value_t = 12)]
    pub pages: usize,

    /// Start without an open document
    #[arg(long)]
    pub no_document: bool,

    /// Lay the popup out right-to-left
    #[arg(long)]
    pub rtl: bool,
}

fn parse_positive(value: &str) -> Result<f64, String> {
    let number: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if number.is_finite() && number > 0.0 {
        Ok(number)
    } else {
        Err(format!("must be a positive number, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpi_must_be_positive() {
        assert!(Args::try_parse_from(["zoom-demo", "--dpi", "0"]).is_err());
        assert!(Args::try_parse_from(["zoom-demo", "--dpi", "-96"]).is_err());
        assert!(Args::try_parse_from(["zoom-demo", "--dpi", "abc"]).is_err());

        let args = Args::try_parse_from(["zoom-demo", "--dpi", "144"]).unwrap();
        assert_eq!(args.dpi, 144.0);
    }
}
