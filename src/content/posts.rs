//! Posts directory scanning.
//!
//! A post is a markdown file named `YYYY-MM-DD-slug.md`. The file stem is the
//! feed id and its date prefix the publication date, both of which optional
//! TOML front matter can refine:
//!
//! ```text
//! +++
//! title = "Intercepting Allocations with the Global Allocator"
//! date = 2023-06-27
//! draft = false
//! +++
//!
//! # Intercepting Allocations with the Global Allocator
//! ```

use super::{ContentError, ContentMetadata, ContentSource};
use crate::{log, utils::date::DateTimeUtc};
use jwalk::WalkDir;
use regex::Regex;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Stem of a post file: date prefix, then a slug.
static RE_POST_STEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})-(.+)$").unwrap());

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatter {
    title: Option<String>,
    date: Option<DateTimeUtc>,
    draft: bool,
}

/// Lists `*.md` posts under a directory, newest first.
#[derive(Debug, Clone)]
pub struct PostDirSource {
    dir: PathBuf,
}

impl PostDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collect_markdown(&self) -> Result<Vec<PathBuf>, ContentError> {
        fs::metadata(&self.dir).map_err(|err| ContentError::Io(self.dir.clone(), err))?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.dir).sort(true) {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(self.dir.as_path()).to_path_buf();
                ContentError::Io(path, err.into())
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }
        Ok(files)
    }
}

impl ContentSource for PostDirSource {
    fn list_published(&self) -> Result<Vec<ContentMetadata>, ContentError> {
        let files = self.collect_markdown()?;

        let mut posts = Vec::with_capacity(files.len());
        let mut unnamed = 0;
        for path in &files {
            match read_post(path)? {
                Post::Published(meta) => posts.push(meta),
                Post::Draft => {}
                Post::Unnamed => unnamed += 1,
            }
        }

        if unnamed > 0 {
            log!("content"; "skipped {} files in {} not named YYYY-MM-DD-slug.md", unnamed, self.dir().display());
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(posts)
    }
}

enum Post {
    Published(ContentMetadata),
    Draft,
    Unnamed,
}

fn read_post(path: &Path) -> Result<Post, ContentError> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let Some(caps) = RE_POST_STEM.captures(stem) else {
        return Ok(Post::Unnamed);
    };
    let stem_date = &caps[1];

    let content =
        fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
    let (front, body) = split_front_matter(&content);
    let front: FrontMatter = match front {
        Some(raw) => toml::from_str(raw)
            .map_err(|err| ContentError::FrontMatter(path.to_path_buf(), err))?,
        None => FrontMatter::default(),
    };

    if front.draft {
        return Ok(Post::Draft);
    }

    let title = front
        .title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| first_heading(body).map(str::to_string))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ContentError::MissingTitle(path.to_path_buf()))?;

    let date = match front.date {
        Some(date) => date,
        None => stem_date
            .parse()
            .map_err(|source| ContentError::InvalidDate {
                path: path.to_path_buf(),
                value: stem_date.to_string(),
                source,
            })?,
    };

    Ok(Post::Published(ContentMetadata {
        title,
        id: stem.to_string(),
        date,
        link: None,
    }))
}

/// Split `+++`-fenced front matter from the body.
fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("+++\n")
        .or_else(|| content.strip_prefix("+++\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "+++" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    // Unterminated fence
    (None, content)
}

fn first_heading(body: &str) -> Option<&str> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
}
