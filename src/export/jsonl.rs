//! JSONL writer utility.
//!
//! One compact JSON object per line, making the format grep-friendly and
//! easy to stream. The format is stable across runs; avoid breaking changes
//! unless versioned explicitly.

use crate::errors::{Error, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub struct JsonlWriter {
    path: PathBuf,
    w: BufWriter<File>,
}

impl JsonlWriter {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let f = File::create(&path).map_err(|e| Error::Write {
            path: path.clone(),
            source: e,
        })?;
        Ok(Self {
            path,
            w: BufWriter::new(f),
        })
    }

    pub fn write_obj<T: Serialize>(&mut self, obj: &T) -> Result<()> {
        serde_json::to_writer(&mut self.w, obj)?;
        self.w.write_all(b"\n").map_err(|e| Error::Write {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.w.flush().map_err(|e| Error::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
