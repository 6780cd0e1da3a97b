use std::io::Write;

use anyhow::Result;

use hexbin::{canonicalize, decode_bytes, decode_wide, decoded_len, log};

use crate::{cli::Command, config::ToolConfig};

fn format_units<T: Copy + Into<u32>>(units: &[T], width: usize) -> String {
    let items: Vec<String> = units
        .iter()
        .map(|&u| {
            let value: u32 = u.into();
            format!("0x{:0width$X}", value, width = width)
        })
        .collect();
    format!("[{}]", items.join(", "))
}

pub fn execute<W: Write>(command: &Command, config: &ToolConfig, out: &mut W) -> Result<()> {
    match command {
        Command::Check { hex } => {
            let mut malformed = 0;
            for literal in hex {
                match decoded_len(literal.as_bytes()) {
                    Some(len) => writeln!(out, "{}: valid ({} octets)", literal, len)?,
                    None => {
                        malformed += 1;
                        writeln!(out, "{}: invalid", literal)?;
                    }
                }
            }
            if malformed > 0 {
                anyhow::bail!("{} of {} inputs are malformed", malformed, hex.len());
            }
        }
        Command::Canon { hex } => {
            let canonical = canonicalize(hex)
                .ok_or_else(|| anyhow::format_err!("malformed hex input: {:?}", hex))?;
            writeln!(out, "{}", canonical)?;
        }
        Command::Decode { hex, wide: false } => {
            let decoded = decode_bytes(hex.as_bytes())
                .ok_or_else(|| anyhow::format_err!("malformed hex input: {:?}", hex))?;
            log::debug!("Decoded {} bytes", decoded.len());
            writeln!(out, "{}", format_units(decoded.as_slice(), 2))?;
        }
        Command::Decode { hex, wide: true } => {
            let decoded = decode_wide(hex.as_bytes())
                .ok_or_else(|| anyhow::format_err!("malformed hex input: {:?}", hex))?;
            log::debug!("Decoded {} wide units", decoded.len());
            writeln!(out, "{}", format_units(decoded.as_slice(), 4))?;
        }
        Command::Validate { hex } => {
            let value = config
                .facets
                .validate(hex)
                .map_err(|e| anyhow::format_err!("{:?}: {}", hex, e))?;
            writeln!(out, "{}: ok ({} octets)", value, value.len())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use hexbin::datatype::HexBinaryFacets;

    fn run(command: Command, config: &ToolConfig) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = execute(&command, config, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check() {
        let (result, output) = run(
            Command::Check {
                hex: vec!["4d3a".to_string(), "4d3".to_string()],
            },
            &ToolConfig::default(),
        );
        assert!(result.is_err());
        assert_eq!(output, "4d3a: valid (2 octets)\n4d3: invalid\n");

        let (result, _) = run(
            Command::Check {
                hex: vec!["00".to_string()],
            },
            &ToolConfig::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_canon() {
        let (result, output) = run(
            Command::Canon {
                hex: "ab12cd".to_string(),
            },
            &ToolConfig::default(),
        );
        assert!(result.is_ok());
        assert_eq!(output, "AB12CD\n");

        let (result, output) = run(
            Command::Canon {
                hex: String::new(),
            },
            &ToolConfig::default(),
        );
        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_decode() {
        let (result, output) = run(
            Command::Decode {
                hex: "4D3a".to_string(),
                wide: false,
            },
            &ToolConfig::default(),
        );
        assert!(result.is_ok());
        assert_eq!(output, "[0x4D, 0x3A]\n");

        let (result, output) = run(
            Command::Decode {
                hex: "4D3a".to_string(),
                wide: true,
            },
            &ToolConfig::default(),
        );
        assert!(result.is_ok());
        assert_eq!(output, "[0x004D, 0x003A]\n");

        let (result, _) = run(
            Command::Decode {
                hex: "4G3A".to_string(),
                wide: false,
            },
            &ToolConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        let config = ToolConfig {
            log_level: None,
            facets: HexBinaryFacets {
                max_length: Some(2),
                ..Default::default()
            },
        };
        let (result, output) = run(
            Command::Validate {
                hex: "beef".to_string(),
            },
            &config,
        );
        assert!(result.is_ok());
        assert_eq!(output, "BEEF: ok (2 octets)\n");

        let (result, _) = run(
            Command::Validate {
                hex: "c0ffee".to_string(),
            },
            &config,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("maxLength"));
    }
}
