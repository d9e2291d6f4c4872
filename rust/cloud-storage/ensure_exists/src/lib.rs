use std::ops::Deref;


/// Proof that some value T was obtained via the [EnsureExists] trait,
/// recording whether it already existed or had to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ensured<T> {
    /// The resource was already present
    Existing(T),
    /// The resource was absent and has been created
    Created(T),
}

impl<T> Deref for Ensured<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self {
            Ensured::Existing(t) | Ensured::Created(t) => t,
        }
    }
}

impl<T> Ensured<T> {
    /// true if this value was produced by [EnsureExists::create]
    pub fn was_created(&self) -> bool {
        matches!(self, Ensured::Created(_))
    }

    /// discard the proof and return the inner value
    pub fn into_inner(self) -> T {
        match self {
            Ensured::Existing(t) | Ensured::Created(t) => t,
        }
    }
}

/// trait to abstract away the idempotent behaviour of ensuring some resource exists and creating it if not.
pub trait EnsureExists<T> {
    type Err;

    /// `Ok(None)` must only be returned when the resource is confirmed absent.
    /// Failures to determine existence are errors, they never lead to [EnsureExists::create].
    fn check_exists(&self) -> impl Future<Output = Result<Option<T>, Self::Err>>;

    fn create(&self) -> impl Future<Output = Result<T, Self::Err>>;

    fn ensure_exists(&self) -> impl Future<Output = Result<Ensured<T>, Self::Err>> {
        async move {
            match self.check_exists().await? {
                None => self.create().await.map(Ensured::Created),
                Some(t) => Ok(Ensured::Existing(t)),
            }
        }
    }
}
