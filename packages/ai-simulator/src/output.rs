//! Output writers for simulation results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::GameMetrics;
use crate::types::OutputFormat;

pub struct OutputWriter {
    writer: Box<dyn Write + Send>,
    format: OutputFormat,
    path: PathBuf,
    /// Held back until `finish` for the JSON array format.
    pending: Vec<GameMetrics>,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let mut filename = format!("simulation_{timestamp}.{extension}");
        if compress {
            filename.push_str(".gz");
        }
        let path = dir.join(filename);

        let file = File::create(&path)?;
        let writer: Box<dyn Write + Send> = if compress {
            Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(Self {
            writer,
            format: format.clone(),
            path,
            pending: Vec::new(),
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(metrics)?;
                writeln!(self.writer, "{json}")?;
            }
            OutputFormat::Json => self.pending.push(metrics.clone()),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if matches!(self.format, OutputFormat::Json) {
            serde_json::to_writer_pretty(&mut self.writer, &self.pending)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn output_path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use xeri_backend::domain::Difficulty;
    use xeri_backend::EngineConfig;

    use super::*;
    use crate::metrics::build_game_metrics;
    use crate::simulator::Simulator;

    #[test]
    fn json_format_writes_one_array_on_finish() {
        let dir = tempfile::tempdir().unwrap();
        let sim = Simulator::new(EngineConfig::default());
        let mut writer =
            OutputWriter::new(dir.path().to_str().unwrap(), &OutputFormat::Json, false).unwrap();
        let path = writer.output_path().to_path_buf();

        for (n, seed) in [(1, 40), (2, 41)] {
            let result = sim.simulate_game(seed, [Difficulty::Medium, Difficulty::Easy]).unwrap();
            writer.write_game(&build_game_metrics(n, &result, 0.0)).unwrap();
        }
        writer.finish().unwrap();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
        let body: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let games = body.as_array().unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[1]["game_number"], 2);
        assert_eq!(games[1]["seed"], 41);
        assert_eq!(games[0]["seats"].as_array().map(Vec::len), Some(2));
    }
}
