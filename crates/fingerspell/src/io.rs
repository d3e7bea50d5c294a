//! JSON recordings, practice configs and reports.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use fingerspell_core::{HandLandmarks, LandmarkPoint};
use fingerspell_letters::{ClassificationResult, ClassifierParams, Letter};

use crate::FramePipeline;

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, IoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load classifier thresholds from a JSON file. Missing fields keep defaults.
pub fn load_params(path: impl AsRef<Path>) -> Result<ClassifierParams, IoError> {
    read_json(path)
}

/// A recorded stream of detector output, one entry per frame.
///
/// `null` or an empty list marks a frame without a hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameRecording {
    pub frames: Vec<Option<Vec<LandmarkPoint>>>,
}

impl FrameRecording {
    pub fn from_hands<I>(hands: I) -> Self
    where
        I: IntoIterator<Item = Option<HandLandmarks>>,
    {
        Self {
            frames: hands
                .into_iter()
                .map(|hand| hand.map(HandLandmarks::into_vec))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Landmarks of frame `index`, `None` when out of range or without a hand.
    pub fn frame(&self, index: usize) -> Option<&[LandmarkPoint]> {
        self.frames.get(index).and_then(|f| f.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&[LandmarkPoint]>> {
        self.frames.iter().map(|f| f.as_deref())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        read_json(path)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        write_json(self, path)
    }
}

/// Configuration for a batch practice run over a recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeConfig {
    pub frames_path: String,
    pub letter: Letter,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub params: Option<ClassifierParams>,
}

impl PracticeConfig {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        read_json(path)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        write_json(self, path)
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("fingerspell_report.json"))
    }

    /// Resolve `frames_path` against the directory holding the config file.
    pub fn resolve_frames_path(&self, config_path: &Path) -> PathBuf {
        let frames = Path::new(&self.frames_path);
        match config_path.parent() {
            Some(dir) if frames.is_relative() => dir.join(frames),
            _ => frames.to_path_buf(),
        }
    }

    /// Pipeline with the configured thresholds, or the defaults.
    pub fn build_pipeline(&self) -> FramePipeline {
        FramePipeline::new(self.params.clone().unwrap_or_default())
    }
}

/// Per-frame results of a practice run and their tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeReport {
    pub frames_path: String,
    pub letter: Letter,
    pub results: Vec<ClassificationResult>,
    pub correct: usize,
    pub incorrect: usize,
    pub waiting: usize,
}

impl PracticeReport {
    pub fn from_results(
        frames_path: impl Into<String>,
        letter: Letter,
        results: Vec<ClassificationResult>,
    ) -> Self {
        let count = |kind| results.iter().filter(|r| **r == kind).count();
        Self {
            frames_path: frames_path.into(),
            letter,
            correct: count(ClassificationResult::Correct),
            incorrect: count(ClassificationResult::Incorrect),
            waiting: count(ClassificationResult::Waiting),
            results,
        }
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        read_json(path)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        write_json(self, path)
    }
}
