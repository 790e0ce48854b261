use serde::Serialize;
use serde_yaml::Value;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    position: usize,
    title: String,
    artist: Option<String>,
    label: Option<String>,
    timestamp: Option<String>,
}

impl Track {
    pub fn new(position: usize, title: impl Into<String>) -> Self {
        Track {
            position,
            title: title.into(),
            artist: None,
            label: None,
            timestamp: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// 1-based position in the input
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tracklist {
    title: Option<String>,
    tracks: Vec<Track>,
}

impl Tracklist {
    pub fn new(title: Option<String>, tracks: Vec<Track>) -> Self {
        Tracklist { title, tracks }
    }

    /// Read and parse the tracklist file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::parse(path, "missing tracklist file"));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::parse(path, format!("failed to read file: {}", e)))?;

        Self::from_yaml_str(&content, path)
    }

    /// Parse YAML content; `origin` only names the source in errors.
    ///
    /// Accepts a mapping of timestamps to tracks, a list of tracks, or a
    /// document with a `tracks` key and an optional `title`.
    pub fn from_yaml_str(content: &str, origin: &Path) -> Result<Self> {
        parse_document(content).map_err(|message| Error::parse(origin, message))
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn parse_document(content: &str) -> std::result::Result<Tracklist, String> {
    let document: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

    match document {
        Value::Null => Err("tracklist is empty".to_string()),
        Value::Mapping(mut map) if map.contains_key("tracks") => {
            let title = match map.remove("title") {
                None | Some(Value::Null) => None,
                Some(value) => Some(
                    scalar_text(&value).ok_or_else(|| "tracklist title must be text".to_string())?,
                ),
            };
            let tracks = parse_tracks(map.remove("tracks").unwrap_or(Value::Null))?;
            Ok(Tracklist::new(title, tracks))
        }
        other => Ok(Tracklist::new(None, parse_tracks(other)?)),
    }
}

fn parse_tracks(value: Value) -> std::result::Result<Vec<Track>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_track(index + 1, None, item))
            .collect(),
        Value::Mapping(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(index, (key, item))| {
                let position = index + 1;
                let timestamp = scalar_text(&key)
                    .ok_or_else(|| format!("track {} has a non-text timestamp", position))?;
                parse_track(position, Some(timestamp), item)
            })
            .collect(),
        _ => Err("expected a list of tracks or a mapping of timestamps to tracks".to_string()),
    }
}

fn parse_track(
    position: usize,
    timestamp: Option<String>,
    value: Value,
) -> std::result::Result<Track, String> {
    let Value::Mapping(fields) = value else {
        return Err(format!("track {} must be a mapping of fields", position));
    };

    let field = |name: &str| -> std::result::Result<Option<String>, String> {
        match fields.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => scalar_text(value)
                .map(Some)
                .ok_or_else(|| format!("track {}: field `{}` must be text", position, name)),
        }
    };

    let title = field("title")?
        .filter(|title| !title.is_empty())
        .ok_or_else(|| format!("track {} has no title", position))?;

    let timestamp = match timestamp {
        Some(timestamp) => Some(timestamp),
        None => field("timestamp")?,
    };

    Ok(Track {
        position,
        title,
        artist: field("artist")?,
        label: field("label")?,
        timestamp,
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
