//! Collection wrapper types for displaying groups of domain objects.
//!
//! These wrappers format collections with consistent structure and handle
//! empty collections gracefully.

use std::{collections::HashMap, fmt, ops::Index};

use crate::models::{AiModel, ContentPlanSummary, Post, Rubric, SocialNetwork};

/// Newtype wrapper for displaying collections of content plan summaries.
///
/// # Examples
///
/// ```rust
/// use cadence_core::display::PlanSummaries;
///
/// let summaries = PlanSummaries(vec![]);
/// assert_eq!(format!("{summaries}"), "No content plans found.\n");
/// ```
pub struct PlanSummaries(pub Vec<ContentPlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the summary at the given index.
    pub fn get(&self, index: usize) -> Option<&ContentPlanSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentPlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = ContentPlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = ContentPlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a ContentPlanSummary;
    type IntoIter = std::slice::Iter<'a, ContentPlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No content plans found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// Posts of a plan grouped under one heading per publish date.
///
/// Posts are expected in calendar order (publish date, then sort order), as
/// returned by the store. Network ids are shown by name when the networks are
/// supplied with [`PostCalendar::with_networks`].
pub struct PostCalendar {
    pub posts: Vec<Post>,
    network_names: HashMap<u64, String>,
}

impl PostCalendar {
    /// Create a calendar over posts in calendar order.
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            network_names: HashMap::new(),
        }
    }

    /// Resolve network names from the given networks.
    pub fn with_networks(mut self, networks: &[SocialNetwork]) -> Self {
        self.network_names = networks
            .iter()
            .map(|network| (network.id, network.name.clone()))
            .collect();
        self
    }

    /// Check if the calendar has no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Number of posts in the calendar.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Get an iterator over the posts.
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }
}

impl fmt::Display for PostCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.posts.is_empty() {
            return writeln!(f, "No posts found.");
        }

        let mut current_date = None;
        for post in &self.posts {
            if current_date != Some(post.publish_date) {
                writeln!(
                    f,
                    "## {} ({})",
                    post.publish_date,
                    post.publish_date.strftime("%A")
                )?;
                writeln!(f)?;
                current_date = Some(post.publish_date);
            }

            let network = self
                .network_names
                .get(&post.social_network_id)
                .cloned()
                .unwrap_or_else(|| format!("network {}", post.social_network_id));
            let time = post
                .publish_time
                .map(|time| format!(" {}", time.strftime("%H:%M")))
                .unwrap_or_default();

            writeln!(
                f,
                "- **{}**{time} [{network}] {} (ID: {})",
                post.title,
                post.status.with_icon(),
                post.id
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of rubrics.
pub struct Rubrics(pub Vec<Rubric>);

impl fmt::Display for Rubrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No rubrics found.")
        } else {
            for rubric in &self.0 {
                write!(f, "{rubric}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the social network catalog.
pub struct SocialNetworks(pub Vec<SocialNetwork>);

impl fmt::Display for SocialNetworks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for network in &self.0 {
            write!(f, "{network}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the AI model catalog.
pub struct AiModels(pub Vec<AiModel>);

impl fmt::Display for AiModels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for model in &self.0 {
            write!(f, "{model}")?;
        }
        Ok(())
    }
}
