//! Match/gap analysis between a résumé and an optional job description.

use std::cmp::Reverse;

use crate::analysis::frequency::FrequencyMap;

/// Keywords reported when there is no job description to compare against.
pub const MAX_RESUME_ONLY_MATCHES: usize = 15;
pub const MAX_MATCHES: usize = 20;
pub const MAX_MISSING: usize = 10;

/// Frequency maps for both inputs. `job` is `None` when no job description
/// was supplied.
#[derive(Debug, Clone)]
pub struct KeywordProfile {
    pub resume: FrequencyMap,
    pub job: Option<FrequencyMap>,
}

impl KeywordProfile {
    /// Ranked keywords the résumé shares with the job description, or the
    /// résumé's own most frequent keywords when there is no job description.
    pub fn matches(&self) -> Vec<String> {
        match &self.job {
            None => {
                let mut ranked: Vec<_> = self.resume.iter().collect();
                // Stable sort over catalog-ordered entries keeps taxonomy order on ties.
                ranked.sort_by_key(|e| Reverse(e.count));
                ranked
                    .into_iter()
                    .take(MAX_RESUME_ONLY_MATCHES)
                    .map(|e| e.keyword.to_string())
                    .collect()
            }
            Some(job) => {
                let mut shared: Vec<(&'static str, u32, u32, usize)> = self
                    .resume
                    .iter()
                    .filter_map(|e| {
                        let job_count = job.get(e.keyword);
                        (job_count > 0).then_some((e.keyword, job_count, e.count, e.position))
                    })
                    .collect();
                shared.sort_by_key(|&(_, job_count, resume_count, position)| {
                    (Reverse(job_count), Reverse(resume_count), position)
                });
                shared
                    .into_iter()
                    .take(MAX_MATCHES)
                    .map(|(keyword, ..)| keyword.to_string())
                    .collect()
            }
        }
    }

    /// Job-description keywords the résumé never mentions, most frequent
    /// first. Empty without a job description.
    pub fn missing(&self) -> Vec<String> {
        let Some(job) = &self.job else {
            return Vec::new();
        };

        let mut gaps: Vec<_> = job
            .iter()
            .filter(|e| !self.resume.contains(e.keyword))
            .collect();
        gaps.sort_by_key(|e| (Reverse(e.count), e.position));
        gaps.into_iter()
            .take(MAX_MISSING)
            .map(|e| e.keyword.to_string())
            .collect()
    }
}
