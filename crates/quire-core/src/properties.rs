//! Document properties and workbook options

use chrono::{DateTime, Utc};

/// Metadata written to `docProps/core.xml` and `docProps/app.xml`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocProperties {
    /// Document title
    pub title: Option<String>,
    /// Subject
    pub subject: Option<String>,
    /// Author (`dc:creator` and `cp:lastModifiedBy`)
    pub author: Option<String>,
    /// Manager
    pub manager: Option<String>,
    /// Company
    pub company: Option<String>,
    /// Category
    pub category: Option<String>,
    /// Keywords
    pub keywords: Option<String>,
    /// Comments (`dc:description`)
    pub comments: Option<String>,
    /// Status
    pub status: Option<String>,
    /// Creation time; `None` uses the time the file is written
    pub created: Option<DateTime<Utc>>,
}

impl DocProperties {
    /// Create empty properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subject
    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the author
    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the manager
    pub fn with_manager<S: Into<String>>(mut self, manager: S) -> Self {
        self.manager = Some(manager.into());
        self
    }

    /// Set the company
    pub fn with_company<S: Into<String>>(mut self, company: S) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the category
    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the keywords
    pub fn with_keywords<S: Into<String>>(mut self, keywords: S) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set the comments
    pub fn with_comments<S: Into<String>>(mut self, comments: S) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Set the status
    pub fn with_status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set a fixed creation time, for reproducible output
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

/// Options for how a workbook is packaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkbookOptions {
    /// Write ZIP64 records so parts may exceed 4 GiB
    pub use_zip64: bool,
    /// Deflate level; `None` uses the zip crate's default
    pub compression_level: Option<i64>,
}

impl WorkbookOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ZIP64
    pub fn with_zip64(mut self, use_zip64: bool) -> Self {
        self.use_zip64 = use_zip64;
        self
    }

    /// Set the deflate level (0-9); out of range values are clamped
    pub fn with_compression_level(mut self, level: i64) -> Self {
        let clamped = level.clamp(0, 9);
        if clamped != level {
            log::warn!("compression level {level} outside 0..=9; using {clamped}");
        }
        self.compression_level = Some(clamped);
        self
    }
}
