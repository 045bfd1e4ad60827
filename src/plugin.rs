//! Host integration: the full-text parser plugin surface.
//!
//! A search engine loads a parser plugin, calls its init hook once, then for
//! every document or query opens a session, runs one parse, and closes the
//! session. [`FulltextParser`] mirrors that lifecycle; every hook except
//! `parse` defaults to a no-op.
//!
//! ```text
//! plugin_init
//!   ├─ session_init -> parse -> session_deinit
//!   ├─ session_init -> parse -> session_deinit
//!   └─ ...
//! plugin_deinit
//! ```

use tracing::debug;

use crate::error::Result;
use crate::input::InputSpan;
use crate::session::{ParseSummary, Tokenizer};
use crate::sink::WordSink;
use crate::word::ParseMode;

/// Identity the plugin reports to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Name the host registers the parser under.
    pub name: &'static str,
    /// Plugin authors.
    pub author: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// License identifier.
    pub license: &'static str,
    /// Version, high byte major and low byte minor.
    pub version: u16,
}

impl PluginDescriptor {
    /// `(major, minor)` decoded from [`PluginDescriptor::version`].
    #[must_use]
    pub const fn version_parts(&self) -> (u8, u8) {
        let [major, minor] = self.version.to_be_bytes();
        (major, minor)
    }
}

/// Descriptor of the Thai full-text parser.
pub const DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    name: "thaift_parser",
    author: "Pruet Boonma and Vee Satayamas",
    description: "Thai Full-Text Parser",
    license: "GPL",
    version: 0x0001,
};

/// A parser a full-text search host can drive.
///
/// # Errors
///
/// The lifecycle hooks return `Result` so implementations that acquire
/// resources can fail; the defaults never do.
pub trait FulltextParser {
    /// Host identity for this parser.
    fn descriptor(&self) -> &PluginDescriptor {
        &DESCRIPTOR
    }

    /// Called once when the host loads the plugin.
    fn plugin_init(&self) -> Result<()> {
        debug!(plugin = self.descriptor().name, "plugin init");
        Ok(())
    }

    /// Called once when the host unloads the plugin.
    fn plugin_deinit(&self) -> Result<()> {
        debug!(plugin = self.descriptor().name, "plugin deinit");
        Ok(())
    }

    /// Called before each parse.
    fn session_init(&self) -> Result<()> {
        Ok(())
    }

    /// Called after each parse, whether it succeeded or not.
    fn session_deinit(&self) -> Result<()> {
        Ok(())
    }

    /// Tokenize one document or query.
    ///
    /// # Errors
    ///
    /// See [`Tokenizer::parse`].
    fn parse(
        &self,
        input: InputSpan<'_>,
        mode: ParseMode,
        sink: &mut dyn WordSink,
    ) -> Result<ParseSummary>;

    /// Run one full session: `session_init`, `parse`, `session_deinit`.
    ///
    /// `session_deinit` runs even when `parse` fails; the parse error wins
    /// over a deinit error.
    ///
    /// # Errors
    ///
    /// Any error from the three calls.
    fn run_session(
        &self,
        input: InputSpan<'_>,
        mode: ParseMode,
        sink: &mut dyn WordSink,
    ) -> Result<ParseSummary> {
        self.session_init()?;
        let parsed = self.parse(input, mode, sink);
        let closed = self.session_deinit();
        let summary = parsed?;
        closed?;
        Ok(summary)
    }
}

impl FulltextParser for Tokenizer {
    fn parse(
        &self,
        input: InputSpan<'_>,
        mode: ParseMode,
        sink: &mut dyn WordSink,
    ) -> Result<ParseSummary> {
        Tokenizer::parse(self, input, mode, sink)
    }
}
