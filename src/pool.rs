//! The candidate course pool.
//!
//! A [`CoursePool`] lists every course to be placed, each with the
//! alternative sections it may be taken in. Tokens are parsed once at
//! construction, so optimizers only ever copy pre-expanded genes.
//!
//! Course order is fixed by construction order and is the gene order of
//! every [`Schedule`](crate::schedule::Schedule) built from the pool.

use std::sync::Arc;

use rand::Rng;

use crate::error::{ConfigError, TimetableError};
use crate::slot::{parse_token, TimeSlot};

/// One course's assigned slots: the unit of crossover and mutation.
///
/// Genes are immutable and shared, so copying a schedule never copies slot
/// lists.
pub type Gene = Arc<[TimeSlot]>;

/// A course and its alternative sections.
#[derive(Debug, Clone)]
pub struct Course {
    key: String,
    options: Vec<Gene>,
}

impl Course {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Expanded slot lists, one per section.
    pub fn options(&self) -> &[Gene] {
        &self.options
    }
}

/// Read-only pool of courses and their options for one optimization run.
///
/// # Examples
///
/// ```
/// use u_timetable::pool::CoursePool;
///
/// let pool = CoursePool::new()
///     .with_course("Algorithms", [["월1", "수1"], ["화3", "목3"]])?
///     .with_course("Databases", [["Mon2-3"]])?;
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.course(0).options()[0].len(), 2);
/// # Ok::<(), u_timetable::error::TimetableError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoursePool {
    courses: Vec<Course>,
}

impl CoursePool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a course.
    ///
    /// Each option is a list of time tokens whose expansions are
    /// concatenated in order.
    ///
    /// # Errors
    ///
    /// - [`ParseError`](crate::error::ParseError) if any token is malformed
    /// - [`ConfigError::EmptyCourse`] if `options` is empty
    /// - [`ConfigError::DuplicateCourse`] if `key` is already present
    pub fn with_course<K, O, T, S>(mut self, key: K, options: O) -> Result<Self, TimetableError>
    where
        K: Into<String>,
        O: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push_course(key.into(), options)?;
        Ok(self)
    }

    /// Builds a pool from `(key, options)` pairs, preserving their order.
    pub fn from_courses<I, K, O, T, S>(courses: I) -> Result<Self, TimetableError>
    where
        I: IntoIterator<Item = (K, O)>,
        K: Into<String>,
        O: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::new();
        for (key, options) in courses {
            pool.push_course(key.into(), options)?;
        }
        Ok(pool)
    }

    fn push_course<O, T, S>(&mut self, key: String, options: O) -> Result<(), TimetableError>
    where
        O: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.index_of(&key).is_some() {
            return Err(ConfigError::DuplicateCourse(key).into());
        }

        let mut expanded = Vec::new();
        for tokens in options {
            let mut slots = Vec::new();
            for token in tokens {
                slots.extend(parse_token(token.as_ref())?);
            }
            expanded.push(Gene::from(slots));
        }
        if expanded.is_empty() {
            return Err(ConfigError::EmptyCourse(key).into());
        }

        self.courses.push(Course {
            key,
            options: expanded,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn course(&self, index: usize) -> &Course {
        &self.courses[index]
    }

    /// Course keys in gene order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.courses.iter().map(|c| c.key.as_str())
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.key == key)
    }

    /// Draws one option of course `index` uniformly at random.
    pub fn random_gene<R: Rng>(&self, index: usize, rng: &mut R) -> Gene {
        let options = &self.courses[index].options;
        Arc::clone(&options[rng.random_range(0..options.len())])
    }
}

#[cfg(feature = "serde")]
impl TryFrom<std::collections::BTreeMap<String, Vec<Vec<String>>>> for CoursePool {
    type Error = TimetableError;

    fn try_from(map: std::collections::BTreeMap<String, Vec<Vec<String>>>) -> Result<Self, Self::Error> {
        Self::from_courses(map)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CoursePool {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = std::collections::BTreeMap::<String, Vec<Vec<String>>>::deserialize(deserializer)?;
        Self::try_from(map).map_err(serde::de::Error::custom)
    }
}
