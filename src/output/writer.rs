// src/output/writer.rs
use std::fs::File;
use std::io::{BufWriter, Write};

use pascal_shared_kernel::{InfrastructureError, Result};

use crate::config::Config;

/// Buffered destination chosen by `--output`: a file, or stdout.
pub struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    /// # Errors
    ///
    /// Returns [`InfrastructureError::FileWrite`] when the output file cannot
    /// be created.
    pub fn create(config: &Config) -> Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            let file = File::create(path).map_err(|source| InfrastructureError::FileWrite {
                path: path.clone(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        } else {
            Box::new(BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}
