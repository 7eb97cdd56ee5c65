use {
    rand::Rng,
    crate::models::{
        error::{Error, Result},
        db::{
            Connection,
            CategoryId,
            QuestionId,
            models::Question
        }
    }
};

/// The front end sends this as the category type when "all" is picked.
const ALL_SENTINELS: [&str; 2] = ["click", "all"];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(CategoryId)
}

impl CategoryFilter {
    /// Id `0` and the sentinel types mean every category, as does giving
    /// neither id nor type. A concrete type needs an id to go with it.
    pub fn from_parts(id: Option<CategoryId>, kind: Option<&str>) -> Result<CategoryFilter> {
        let all = kind
            .map(is_all_sentinel)
            .unwrap_or(false);

        match (id, kind) {
            _ if all => Ok(CategoryFilter::All),
            (Some(0), _) | (None, None) => Ok(CategoryFilter::All),
            (Some(id), _) => Ok(CategoryFilter::Only(id)),
            (None, Some(_)) => Err(Error::InvalidArgument("quiz category type without an id"))
        }
    }

    pub fn from_name(name: &str) -> Result<CategoryFilter> {
        if is_all_sentinel(name) {
            Ok(CategoryFilter::All)
        } else {
            name.trim()
                .parse()
                .map_err(|_| Error::InvalidArgument("unknown quiz category"))
                .and_then(|id| CategoryFilter::from_parts(Some(id), None))
        }
    }
}

fn is_all_sentinel(kind: &str) -> bool {
    ALL_SENTINELS
        .iter()
        .any(|sentinel| kind.trim().eq_ignore_ascii_case(sentinel))
}

/// Picks an unseen question, restricted to `filter`. Nothing is remembered
/// between calls; the caller keeps track of `seen`.
pub fn select_next<R: Rng + ?Sized>(seen: &[QuestionId], filter: CategoryFilter, conn: &mut Connection, rng: &mut R) -> Result<Question> {
    Question::candidates(seen, filter, conn)
        .map_err(Error::from)
        .and_then(|candidates| pick(candidates, rng))
}

/// Uniform draw over `[0, candidates.len())`.
pub fn pick<T, R: Rng + ?Sized>(mut candidates: Vec<T>, rng: &mut R) -> Result<T> {
    if candidates.is_empty() {
        return Err(Error::NotFound)
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates.swap_remove(index))
}
