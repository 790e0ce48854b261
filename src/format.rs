use serde::{Deserialize, Serialize};

use crate::tracklist::{Track, Tracklist};

/// Text layouts a tracklist can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TracklistFormat {
    /// `[timestamp]  Artist - Title (Label)`
    Main,
    /// Bold header with `timestamp  Artist - Title (Label)` lines
    Telegram,
}

impl TracklistFormat {
    pub const ALL: [TracklistFormat; 2] = [TracklistFormat::Main, TracklistFormat::Telegram];

    /// Name used in output file names, e.g. `Tracklist.Main.txt`
    pub fn file_label(self) -> &'static str {
        match self {
            TracklistFormat::Main => "Main",
            TracklistFormat::Telegram => "Telegram",
        }
    }

    fn header(self) -> Option<&'static str> {
        match self {
            TracklistFormat::Main => None,
            TracklistFormat::Telegram => Some("**TRACKLIST**"),
        }
    }

    fn title_line(self, title: &str) -> String {
        match self {
            TracklistFormat::Main => title.to_string(),
            TracklistFormat::Telegram => format!("**{}**", title),
        }
    }

    fn marker(self, timestamp: &str) -> String {
        match self {
            TracklistFormat::Main => format!("[{}]", timestamp),
            TracklistFormat::Telegram => timestamp.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            include_labels: true,
        }
    }
}

/// `Artist - Title (Label)`, leaving out whatever the track lacks.
pub fn track_entry(track: &Track, options: &RenderOptions) -> String {
    let mut entry = String::new();
    if let Some(artist) = track.artist() {
        entry.push_str(artist);
        entry.push_str(" - ");
    }
    entry.push_str(track.title());
    if options.include_labels {
        if let Some(label) = track.label() {
            entry.push_str(&format!(" ({})", label));
        }
    }
    entry
}

/// One output line for `track`, without the trailing newline.
///
/// Tracks without a timestamp are numbered by position instead.
pub fn track_line(track: &Track, format: TracklistFormat, options: &RenderOptions) -> String {
    let entry = track_entry(track, options);
    match track.timestamp() {
        Some(timestamp) => format!("{}  {}", format.marker(timestamp), entry),
        None => format!("{}. {}", track.position(), entry),
    }
}

/// Render the whole tracklist; every line ends with `\n`.
pub fn render(tracklist: &Tracklist, format: TracklistFormat, options: &RenderOptions) -> String {
    let mut output = String::new();

    if let Some(title) = tracklist.title() {
        output.push_str(&format.title_line(title));
        output.push_str("\n\n");
    }

    if let Some(header) = format.header() {
        output.push_str(header);
        output.push('\n');
    }

    for track in tracklist.tracks() {
        output.push_str(&track_line(track, format, options));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tracklist {
        Tracklist::new(
            None,
            vec![
                Track::new(1, "Intro")
                    .with_artist("Someone")
                    .with_label("Records")
                    .with_timestamp("00:00"),
                Track::new(2, "Untitled").with_timestamp("03:12"),
                Track::new(3, "Dub").with_artist("Other").with_label("White"),
            ],
        )
    }

    #[test]
    fn test_track_entry_parts() {
        let options = RenderOptions::default();
        let tracklist = sample();
        let tracks = tracklist.tracks();
        assert_eq!(track_entry(&tracks[0], &options), "Someone - Intro (Records)");
        assert_eq!(track_entry(&tracks[1], &options), "Untitled");
    }

    #[test]
    fn test_render_main() {
        let output = render(&sample(), TracklistFormat::Main, &RenderOptions::default());
        assert_eq!(
            output,
            "[00:00]  Someone - Intro (Records)\n[03:12]  Untitled\n3. Other - Dub (White)\n"
        );
    }

    #[test]
    fn test_render_telegram() {
        let output = render(&sample(), TracklistFormat::Telegram, &RenderOptions::default());
        assert_eq!(
            output,
            "**TRACKLIST**\n00:00  Someone - Intro (Records)\n03:12  Untitled\n3. Other - Dub (White)\n"
        );
    }

    #[test]
    fn test_render_without_labels() {
        let options = RenderOptions {
            include_labels: false,
        };
        for format in TracklistFormat::ALL {
            let output = render(&sample(), format, &options);
            assert!(!output.contains("Records"));
            assert!(!output.contains("(White)"));
            assert!(output.contains("Someone - Intro\n"));
        }
    }

    #[test]
    fn test_render_one_line_per_track_in_order() {
        let tracklist = sample();
        for format in TracklistFormat::ALL {
            let output = render(&tracklist, format, &RenderOptions::default());
            let entries: Vec<_> = output
                .lines()
                .filter(|line| *line != "**TRACKLIST**")
                .collect();
            assert_eq!(entries.len(), tracklist.len());
            assert!(entries[0].ends_with("Intro (Records)"));
            assert!(entries[2].ends_with("Dub (White)"));
        }
    }

    #[test]
    fn test_render_with_title() {
        let tracklist = Tracklist::new(
            Some("Summer Mix".to_string()),
            vec![Track::new(1, "Opener").with_timestamp("00:00")],
        );
        assert_eq!(
            render(&tracklist, TracklistFormat::Main, &RenderOptions::default()),
            "Summer Mix\n\n[00:00]  Opener\n"
        );
        assert_eq!(
            render(&tracklist, TracklistFormat::Telegram, &RenderOptions::default()),
            "**Summer Mix**\n\n**TRACKLIST**\n00:00  Opener\n"
        );
    }

    #[test]
    fn test_render_empty_tracklist() {
        let tracklist = Tracklist::new(None, Vec::new());
        assert_eq!(render(&tracklist, TracklistFormat::Main, &RenderOptions::default()), "");
        assert_eq!(
            render(&tracklist, TracklistFormat::Telegram, &RenderOptions::default()),
            "**TRACKLIST**\n"
        );
    }

    #[test]
    fn test_format_serde_names() {
        let parsed: TracklistFormat = serde_yaml::from_str("telegram").unwrap();
        assert_eq!(parsed, TracklistFormat::Telegram);
        assert_eq!(TracklistFormat::Main.file_label(), "Main");
    }
}
