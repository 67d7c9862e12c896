//! Profile View Model
//!
//! Owns the current [`Profile`] and reacts to birth date changes: a
//! validation error is shown as an alert, a birthday opens a greeting, and
//! anything else refreshes the zodiac text.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::domain::entities::{Greeting, Profile};
use crate::domain::observable::{EntityState, ObservableEntity, SubscriptionId};
use crate::domain::value_objects::{ProfileField, ViewModelField};
use crate::ports::{Alert, Presenter};

/// View model for the birthdate form
pub struct ProfileViewModel {
    profile: Profile,
    subscription: Option<SubscriptionId>,
    presenter: Rc<dyn Presenter>,
    greeting: Rc<RefCell<Option<Greeting>>>,
    state: EntityState<ProfileViewModel>,
}

impl ProfileViewModel {
    /// Take ownership of `profile` and start observing it
    pub fn new(profile: Profile, presenter: Rc<dyn Presenter>) -> Self {
        let mut view_model = Self {
            profile,
            subscription: None,
            presenter,
            greeting: Rc::new(RefCell::new(None)),
            state: EntityState::new(),
        };
        view_model.attach();
        view_model
    }

    /// View model over a default profile born today
    pub fn with_default_profile(presenter: Rc<dyn Presenter>) -> Self {
        Self::new(Profile::default(), presenter)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// Replace the profile, moving the change subscription to the new one.
    ///
    /// Returns false if `profile` is the current profile.
    pub fn set_profile(&mut self, profile: Profile) -> bool {
        let changed = self.set_field(|vm| &mut vm.profile, profile, ViewModelField::Profile);
        if changed {
            self.attach();
        }
        changed
    }

    /// Forward a birth date entered in the form
    pub fn set_birth_date(&mut self, birth_date: NaiveDate) -> bool {
        self.profile.set_birth_date(birth_date)
    }

    /// Greeting opened by the most recent birthday, if still open
    pub fn greeting(&self) -> Option<Greeting> {
        self.greeting.borrow().clone()
    }

    /// Drop the open greeting, returning it
    pub fn close_greeting(&mut self) -> Option<Greeting> {
        self.greeting.borrow_mut().take()
    }

    fn attach(&mut self) {
        let presenter = Rc::clone(&self.presenter);
        let greeting = Rc::clone(&self.greeting);

        let id = self.profile.subscribe(move |profile, field| {
            if field == ProfileField::BirthDate {
                on_birth_date_changed(profile, presenter.as_ref(), &greeting);
            }
        });

        tracing::debug!(profile_id = %self.profile.id(), "Attached to profile");
        self.subscription = Some(id);
    }
}

fn on_birth_date_changed(
    profile: &mut Profile,
    presenter: &dyn Presenter,
    greeting: &RefCell<Option<Greeting>>,
) {
    let first_error = profile
        .field_errors(ProfileField::BirthDate)
        .and_then(|errors| errors.first())
        .cloned();

    if let Some(message) = first_error {
        presenter.alert(&Alert::error(message));
    } else if profile.calculate_is_birthday_today(profile.birth_date()) {
        let opened = Greeting::for_profile(profile);
        tracing::info!(
            profile_id = %profile.id(),
            age = opened.age,
            "Opening birthday greeting"
        );
        presenter.show_greeting(&opened);
        *greeting.borrow_mut() = Some(opened);
    } else {
        profile.update_zodiac_info();
    }
}

impl ObservableEntity for ProfileViewModel {
    type Field = ViewModelField;

    fn entity_state(&self) -> &EntityState<Self> {
        &self.state
    }

    fn entity_state_mut(&mut self) -> &mut EntityState<Self> {
        &mut self.state
    }

    fn before_field_update(&mut self, field: ViewModelField) {
        if field == ViewModelField::Profile {
            if let Some(id) = self.subscription.take() {
                self.profile.unsubscribe(id);
                tracing::debug!(profile_id = %self.profile.id(), "Detached from profile");
            }
        }
    }
}

impl std::fmt::Debug for ProfileViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileViewModel")
            .field("profile", &self.profile)
            .field("subscription", &self.subscription)
            .field("greeting", &self.greeting.borrow())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
