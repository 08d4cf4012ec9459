//! Core error types for the extraction and diagram pipeline
//!
//! This module defines the common error type used throughout the pipeline.

use thiserror::Error;

/// Core error types for pipeline processing
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("XML syntax error: {message}")]
    Xml { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Create a new XML syntax error
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_error() {
        let error = PipelineError::xml("unexpected end of input");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("XML syntax error"));
        assert!(error_msg.contains("unexpected end of input"));
    }

    #[test]
    fn test_render_error() {
        let error = PipelineError::render("invalid cell");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Render error"));
        assert!(error_msg.contains("invalid cell"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: PipelineError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("file not found"));
    }
}
