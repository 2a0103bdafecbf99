use log::{debug, warn};
use proposal_docx_engine::{Alignment, ConvertOptions, Header, HeaderLine, Logo};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// A header line: either plain text or a table with formatting.
///
/// ```toml
/// lines = ["Acme Digital", { text = "1 High Street", size_pt = 9 }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderLineConfig {
    Text(String),
    Styled(HeaderLine),
}

impl HeaderLineConfig {
    fn to_line(&self) -> HeaderLine {
        match self {
            Self::Text(text) => HeaderLine::new(text.as_str()),
            Self::Styled(line) => line.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub lines: Vec<HeaderLineConfig>,
    /// Make the first line bold, as for a company name.
    #[serde(default = "default_true")]
    pub bold_first_line: bool,
    /// PNG or JPEG drawn left of the lines. Skipped with a warning when it
    /// cannot be read.
    #[serde(default)]
    pub logo: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            lines: Vec::new(),
            bold_first_line: true,
            logo: None,
        }
    }
}

impl HeaderConfig {
    pub fn to_header(&self) -> Header {
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let line = line.to_line();
                if i == 0 && self.bold_first_line {
                    line.bold()
                } else {
                    line
                }
            })
            .collect();
        Header::new(lines).with_alignment(self.alignment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where relative output paths are placed.
    pub output_dir: Option<PathBuf>,
    pub code_font: String,
    pub rule_spacing_pt: u16,
    /// Style names removed from the catalog before converting.
    pub disabled_styles: Vec<String>,
    pub header: Option<HeaderConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let options = ConvertOptions::default();
        Self {
            output_dir: None,
            code_font: options.code_font,
            rule_spacing_pt: options.rule_spacing_pt,
            disabled_styles: Vec::new(),
            header: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the output directory and logo
        config.output_dir = config
            .output_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));
        if let Some(header) = config.header.as_mut() {
            header.logo = header
                .logo
                .take()
                .map(|logo| Self::expand_path(&logo).unwrap_or(logo));
        }

        debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/proposal-docx");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Converter options with this config's overrides applied.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            code_font: self.code_font.clone(),
            rule_spacing_pt: self.rule_spacing_pt,
            ..ConvertOptions::default()
        }
    }

    /// The configured page header, if it has any text or a readable logo.
    pub fn page_header(&self) -> Option<Header> {
        let config = self.header.as_ref()?;
        let mut header = config.to_header();
        if let Some(path) = &config.logo {
            match Logo::open(path) {
                Ok(logo) => header = header.with_logo(logo),
                Err(e) => warn!("Skipping header logo {}: {e}", path.display()),
            }
        }
        Some(header).filter(|h| !h.is_empty())
    }

    /// Resolves a relative output path against `output_dir`.
    pub fn resolve_output(&self, output: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if output.is_relative() => dir.join(output),
            _ => output.to_path_buf(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/proposal-docx/config.toml"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.convert_options(), ConvertOptions::default());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
code_font = "Consolas"
disabled_styles = ["List Bullet 3", "Quote"]
"#,
        )
        .unwrap();

        assert_eq!(config.code_font, "Consolas");
        assert_eq!(config.rule_spacing_pt, 6);
        assert_eq!(config.disabled_styles, vec!["List Bullet 3", "Quote"]);
        assert_eq!(config.convert_options().code_font, "Consolas");
        assert_eq!(config.convert_options().table_style, "Table Grid");
    }

    #[test]
    fn test_header_lines_plain_and_styled() {
        let config: Config = toml::from_str(
            r#"
[header]
alignment = "center"
lines = [
    "Acme Digital",
    "1 High Street",
    { text = "VAT 123", size_pt = 7 },
]
"#,
        )
        .unwrap();

        let header = config.page_header().unwrap();
        assert_eq!(header.alignment, Alignment::Center);
        assert_eq!(
            header.lines,
            vec![
                HeaderLine::new("Acme Digital").bold(),
                HeaderLine::new("1 High Street"),
                HeaderLine::new("VAT 123").size(7),
            ]
        );
    }

    #[test]
    fn test_header_first_line_not_bold() {
        let config: Config = toml::from_str(
            r#"
[header]
bold_first_line = false
lines = ["Acme Digital"]
"#,
        )
        .unwrap();

        let header = config.page_header().unwrap();
        assert_eq!(header.alignment, Alignment::Right);
        assert!(!header.lines[0].bold);
    }

    #[test]
    fn test_header_without_text_is_ignored() {
        let config: Config = toml::from_str("[header]\nlines = []\n").unwrap();
        assert!(config.header.is_some());
        assert_eq!(config.page_header(), None);
    }

    fn write_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        image::RgbImage::new(12, 6)
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        path
    }

    #[test]
    fn test_header_with_logo() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            header: Some(HeaderConfig {
                lines: vec![HeaderLineConfig::Text("Acme Digital".into())],
                logo: Some(write_png(&temp_dir, "logo.png")),
                ..HeaderConfig::default()
            }),
            ..Config::default()
        };

        let header = config.page_header().unwrap();
        assert_eq!(header.logo.unwrap().dimensions(), (12, 6));
    }

    #[test]
    fn test_logo_only_header() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            header: Some(HeaderConfig {
                logo: Some(write_png(&temp_dir, "logo.png")),
                ..HeaderConfig::default()
            }),
            ..Config::default()
        };

        let header = config.page_header().unwrap();
        assert!(header.lines.is_empty());
        assert!(header.logo.is_some());
    }

    #[test]
    fn test_unreadable_logo_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let not_an_image = temp_dir.path().join("logo.png");
        std::fs::write(&not_an_image, "not an image").unwrap();

        for logo in [not_an_image, temp_dir.path().join("missing.png")] {
            let config = Config {
                header: Some(HeaderConfig {
                    lines: vec![HeaderLineConfig::Text("Acme Digital".into())],
                    logo: Some(logo),
                    ..HeaderConfig::default()
                }),
                ..Config::default()
            };
            let header = config.page_header().unwrap();
            assert_eq!(header.logo, None);
            assert_eq!(header.lines.len(), 1);
        }
    }

    #[test]
    fn test_logo_path_is_expanded() {
        unsafe {
            env::set_var("PROPOSAL_ASSETS", "/custom/assets");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[header]\nlogo = \"$PROPOSAL_ASSETS/logo.png\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(
            config.header.unwrap().logo,
            Some(PathBuf::from("/custom/assets/logo.png"))
        );

        unsafe {
            env::remove_var("PROPOSAL_ASSETS");
        }
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_output_dir_with_env_var_in_toml() {
        unsafe {
            env::set_var("PROPOSAL_OUT", "/custom/proposals");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output_dir = \"$PROPOSAL_OUT/2025\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("/custom/proposals/2025")));

        unsafe {
            env::remove_var("PROPOSAL_OUT");
        }
    }

    #[rstest]
    #[case(Some("/srv/out"), "acme.docx", "/srv/out/acme.docx")]
    #[case(Some("/srv/out"), "/tmp/acme.docx", "/tmp/acme.docx")]
    #[case(None, "acme.docx", "acme.docx")]
    fn test_resolve_output(#[case] dir: Option<&str>, #[case] output: &str, #[case] expected: &str) {
        let config = Config {
            output_dir: dir.map(PathBuf::from),
            ..Config::default()
        };
        assert_eq!(config.resolve_output(Path::new(output)), PathBuf::from(expected));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "rule_spacing_pt = \"wide\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            output_dir: Some(PathBuf::from("/tmp/proposals")),
            rule_spacing_pt: 12,
            disabled_styles: vec!["Quote".to_string()],
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
