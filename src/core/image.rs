use crate::constants::{PROFILE_IMAGE_FALLBACK_URL, PROFILE_IMAGE_URL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Primary,
    Fallback,
}

/// Profile picture source with a single fallback.
///
/// The first load error swaps in the fallback URL; errors after that are
/// ignored so a broken fallback cannot loop.
#[derive(Clone, Debug)]
pub struct ProfileImage {
    primary: &'static str,
    fallback: &'static str,
    source: ImageSource,
}

impl Default for ProfileImage {
    fn default() -> Self {
        Self::new(PROFILE_IMAGE_URL, PROFILE_IMAGE_FALLBACK_URL)
    }
}

impl ProfileImage {
    pub fn new(primary: &'static str, fallback: &'static str) -> Self {
        Self {
            primary,
            fallback,
            source: ImageSource::Primary,
        }
    }

    pub fn source(&self) -> ImageSource {
        self.source
    }

    pub fn current_url(&self) -> &'static str {
        match self.source {
            ImageSource::Primary => self.primary,
            ImageSource::Fallback => self.fallback,
        }
    }

    /// Handle a load error. Returns the URL to switch to, if any.
    pub fn on_error(&mut self) -> Option<&'static str> {
        match self.source {
            ImageSource::Primary => {
                self.source = ImageSource::Fallback;
                Some(self.fallback)
            }
            ImageSource::Fallback => None,
        }
    }
}
