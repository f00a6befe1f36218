pub mod state;
pub mod store;
pub mod timer;
pub mod view;

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

pub use state::{BoardState, TimerState, merge_with_defaults};
pub use store::{Board, EditOutcome, MAX_CHOICES};
pub use timer::TimerSchedule;
pub use view::Status;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Learn,
    Create,
    Move,
}

/// Display order of the cards and of the summary rows.
pub const ALL_CATEGORIES: [Category; 3] = [Category::Learn, Category::Create, Category::Move];

impl Category {
    /// Key used in the persisted snapshot.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Learn => "learn",
            Category::Create => "create",
            Category::Move => "move",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Learn => "LEARN",
            Category::Create => "CREATE",
            Category::Move => "MOVE",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Category::Learn => 0,
            Category::Create => 1,
            Category::Move => 2,
        }
    }

    pub fn next(self) -> Self {
        ALL_CATEGORIES[(self.index() + 1) % ALL_CATEGORIES.len()]
    }

    pub fn prev(self) -> Self {
        ALL_CATEGORIES[(self.index() + ALL_CATEGORIES.len() - 1) % ALL_CATEGORIES.len()]
    }
}

/// One value per category. Every category is always present, so a
/// snapshot missing a category can only exist in its stored form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerCategory<T> {
    pub learn: T,
    pub create: T,
    pub r#move: T,
}

impl<T> PerCategory<T> {
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            learn: f(Category::Learn),
            create: f(Category::Create),
            r#move: f(Category::Move),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        ALL_CATEGORIES.into_iter().map(move |c| (c, &self[c]))
    }
}

impl<T: Clone> PerCategory<T> {
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<Category> for PerCategory<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        match category {
            Category::Learn => &self.learn,
            Category::Create => &self.create,
            Category::Move => &self.r#move,
        }
    }
}

impl<T> IndexMut<Category> for PerCategory<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Learn => &mut self.learn,
            Category::Create => &mut self.create,
            Category::Move => &mut self.r#move,
        }
    }
}
