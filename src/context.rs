//! Scoped activation of themes
//!
//! A [`Context`] gives access to the external configuration and to the figure
//! currently being drawn. [`Session`] is the in-process implementation.
//!
//! Activating a theme on a context returns an [`Activation`] guard.
//! While the guard lives, the theme's configuration is in effect. When it is
//! finished or dropped, the previous configuration is restored and then the
//! theme transforms run on the current figure.
use std::ops::{Deref, DerefMut};

use plotheme_base::Figure;

use crate::rc::{self, MemoryStore, Store};
use crate::{Result, Theme};

/// What a theme needs from the plotting environment it is activated on
pub trait Context {
    /// Type of the configuration store
    type Store: rc::Store;

    /// The configuration store
    fn rc(&self) -> &Self::Store;

    /// The configuration store, mutable
    fn rc_mut(&mut self) -> &mut Self::Store;

    /// The figure currently being drawn, if any
    fn current_figure_mut(&mut self) -> Option<&mut Figure>;
}

/// In-process plotting context: a configuration store and a list of figures.
#[derive(Debug, Clone, Default)]
pub struct Session {
    rc: MemoryStore,
    figures: Vec<Figure>,
    current: Option<usize>,
}

impl Session {
    /// Build a session with the library defaults
    pub fn new() -> Self {
        Session::default()
    }

    /// Build a session over the given store
    pub fn with_store(rc: MemoryStore) -> Self {
        Session {
            rc,
            ..Default::default()
        }
    }

    /// Create a new figure and make it current
    pub fn figure(&mut self) -> &mut Figure {
        self.figures.push(Figure::new());
        let idx = self.figures.len() - 1;
        self.current = Some(idx);
        &mut self.figures[idx]
    }

    /// The current figure, if any
    pub fn current_figure(&self) -> Option<&Figure> {
        self.current.and_then(|idx| self.figures.get(idx))
    }

    /// All figures created in this session
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }
}

impl Context for Session {
    type Store = MemoryStore;

    fn rc(&self) -> &MemoryStore {
        &self.rc
    }

    fn rc_mut(&mut self) -> &mut MemoryStore {
        &mut self.rc
    }

    fn current_figure_mut(&mut self) -> Option<&mut Figure> {
        self.current.and_then(|idx| self.figures.get_mut(idx))
    }
}

/// A theme activated on a context.
///
/// Derefs to the context, so that plots can be drawn through the guard.
/// Exit happens with [`Activation::finish`], or on drop. In the latter case,
/// a failing transform is logged, as it cannot be returned.
#[derive(Debug)]
pub struct Activation<'a, C: Context> {
    theme: &'a Theme,
    ctx: &'a mut C,
    snapshot: Option<rc::Params>,
}

impl<'a, C: Context> Activation<'a, C> {
    pub(crate) fn enter(theme: &'a Theme, ctx: &'a mut C) -> Self {
        log::debug!("entering theme '{}'", theme.name());
        let snapshot = ctx.rc().get_all();
        theme.apply(ctx.rc_mut());
        Activation {
            theme,
            ctx,
            snapshot: Some(snapshot),
        }
    }

    /// The theme being active
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// The context the theme is active on
    pub fn context(&mut self) -> &mut C {
        &mut *self.ctx
    }

    /// Exit the activation: restore the configuration and run the transforms
    pub fn finish(mut self) -> Result<()> {
        self.exit()
    }

    fn exit(&mut self) -> Result<()> {
        let Some(snapshot) = self.snapshot.take() else {
            return Ok(());
        };
        let theme = self.theme;
        log::debug!("exiting theme '{}'", theme.name());
        self.ctx.rc_mut().restore(snapshot);

        let transforms = theme.transforms();
        if transforms.is_empty() {
            return Ok(());
        }
        match self.ctx.current_figure_mut() {
            Some(fig) => transforms.apply(fig)?,
            None => log::debug!("no current figure to transform"),
        }
        Ok(())
    }
}

impl<C: Context> Deref for Activation<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.ctx
    }
}

impl<C: Context> DerefMut for Activation<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.ctx
    }
}

impl<C: Context> Drop for Activation<'_, C> {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            log::error!("failed to exit theme '{}': {}", self.theme.name(), err);
        }
    }
}
