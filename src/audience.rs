//! Receivers of messages, sounds and player list updates.

use std::sync::Arc;

use text::Component;

use crate::sound::{Sound, SoundStop};
use crate::tab::TabView;

/// Something that can receive messages and sounds.
///
/// Every method has an empty default, so an implementor only overrides what
/// it can display.
pub trait Audience {
    /// Show a chat message.
    fn send_message(&self, _message: &Component) {}

    /// Show a message above the hotbar.
    fn send_action_bar(&self, _message: &Component) {}

    /// Play a sound at the receiver's own location.
    fn play_sound(&self, _sound: &Sound) {}

    /// Play a sound at a position in the world.
    fn play_sound_at(&self, _sound: &Sound, _x: f64, _y: f64, _z: f64) {}

    fn stop_sound(&self, _stop: &SoundStop) {}

    fn send_player_list_header_and_footer(&self, _header: &Component, _footer: &Component) {}

    /// Send both parts of `view` as the player list header and footer.
    fn send_tab_view(&self, view: &TabView) {
        self.send_player_list_header_and_footer(view.header(), view.footer());
    }
}

/// An audience that receives nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyAudience;

impl Audience for EmptyAudience {}

/// Allow boxed and shared audiences to be used as audiences.
impl<A: Audience + ?Sized> Audience for Box<A> {
    fn send_message(&self, message: &Component) {
        self.as_ref().send_message(message);
    }

    fn send_action_bar(&self, message: &Component) {
        self.as_ref().send_action_bar(message);
    }

    fn play_sound(&self, sound: &Sound) {
        self.as_ref().play_sound(sound);
    }

    fn play_sound_at(&self, sound: &Sound, x: f64, y: f64, z: f64) {
        self.as_ref().play_sound_at(sound, x, y, z);
    }

    fn stop_sound(&self, stop: &SoundStop) {
        self.as_ref().stop_sound(stop);
    }

    fn send_player_list_header_and_footer(&self, header: &Component, footer: &Component) {
        self.as_ref().send_player_list_header_and_footer(header, footer);
    }
}

impl<A: Audience + ?Sized> Audience for Arc<A> {
    fn send_message(&self, message: &Component) {
        self.as_ref().send_message(message);
    }

    fn send_action_bar(&self, message: &Component) {
        self.as_ref().send_action_bar(message);
    }

    fn play_sound(&self, sound: &Sound) {
        self.as_ref().play_sound(sound);
    }

    fn play_sound_at(&self, sound: &Sound, x: f64, y: f64, z: f64) {
        self.as_ref().play_sound_at(sound, x, y, z);
    }

    fn stop_sound(&self, stop: &SoundStop) {
        self.as_ref().stop_sound(stop);
    }

    fn send_player_list_header_and_footer(&self, header: &Component, footer: &Component) {
        self.as_ref().send_player_list_header_and_footer(header, footer);
    }
}

/// Forwards every call to each wrapped audience, in order.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use textcomponent::{Audience, Component, ForwardingAudience};
///
/// #[derive(Default)]
/// struct Inbox(Mutex<Vec<String>>);
///
/// impl Audience for Inbox {
///     fn send_message(&self, message: &Component) {
///         self.0.lock().unwrap().push(message.to_plain_string());
///     }
/// }
///
/// let a = Arc::new(Inbox::default());
/// let b = Arc::new(Inbox::default());
/// let everyone = ForwardingAudience::new(vec![a.clone(), b.clone()]);
///
/// everyone.send_message(&Component::text("hi"));
/// assert_eq!(*a.0.lock().unwrap(), vec!["hi"]);
/// assert_eq!(*b.0.lock().unwrap(), vec!["hi"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ForwardingAudience<A> {
    audiences: Vec<A>,
}

impl<A: Audience> ForwardingAudience<A> {
    pub fn new(audiences: Vec<A>) -> Self {
        Self { audiences }
    }

    pub fn audiences(&self) -> &[A] {
        &self.audiences
    }

    pub fn push(&mut self, audience: A) {
        self.audiences.push(audience);
    }

    fn each(&self, f: impl Fn(&A)) {
        self.audiences.iter().for_each(f);
    }
}

impl<A: Audience> Audience for ForwardingAudience<A> {
    fn send_message(&self, message: &Component) {
        self.each(|audience| audience.send_message(message));
    }

    fn send_action_bar(&self, message: &Component) {
        self.each(|audience| audience.send_action_bar(message));
    }

    fn play_sound(&self, sound: &Sound) {
        self.each(|audience| audience.play_sound(sound));
    }

    fn play_sound_at(&self, sound: &Sound, x: f64, y: f64, z: f64) {
        self.each(|audience| audience.play_sound_at(sound, x, y, z));
    }

    fn stop_sound(&self, stop: &SoundStop) {
        self.each(|audience| audience.stop_sound(stop));
    }

    fn send_player_list_header_and_footer(&self, header: &Component, footer: &Component) {
        self.each(|audience| audience.send_player_list_header_and_footer(header, footer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::SoundSource;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Audience for Recorder {
        fn send_message(&self, message: &Component) {
            self.record(format!("message {message}"));
        }

        fn send_action_bar(&self, message: &Component) {
            self.record(format!("action bar {message}"));
        }

        fn play_sound(&self, sound: &Sound) {
            self.record(format!("play {}", sound.name));
        }

        fn play_sound_at(&self, sound: &Sound, x: f64, y: f64, z: f64) {
            self.record(format!("play {} at {x} {y} {z}", sound.name));
        }

        fn stop_sound(&self, stop: &SoundStop) {
            self.record(format!("stop {:?}", stop.sound));
        }

        fn send_player_list_header_and_footer(&self, header: &Component, footer: &Component) {
            self.record(format!("tab {header}/{footer}"));
        }
    }

    #[test]
    fn forwards_every_call_to_every_audience() {
        let first = Arc::new(Recorder::default());
        let second = Arc::new(Recorder::default());
        let forwarding = ForwardingAudience::new(vec![first.clone(), second.clone()]);

        let sound = Sound::new("pop", SoundSource::Player, 1.0, 1.0);
        forwarding.send_message(&Component::text("hi"));
        forwarding.send_action_bar(&Component::text("bar"));
        forwarding.play_sound(&sound);
        forwarding.play_sound_at(&sound, 1.0, 2.0, 3.0);
        forwarding.stop_sound(&SoundStop::named("pop"));
        forwarding.send_tab_view(&TabView::new(Component::text("h"), Component::text("f")));

        let expected = vec![
            "message hi",
            "action bar bar",
            "play pop",
            "play pop at 1 2 3",
            "stop Some(\"pop\")",
            "tab h/f",
        ];
        assert_eq!(first.calls(), expected);
        assert_eq!(second.calls(), expected);
    }

    #[test]
    fn nested_forwarding_with_boxed_audiences() {
        let leaf = Arc::new(Recorder::default());
        let inner: Box<dyn Audience> = Box::new(ForwardingAudience::new(vec![leaf.clone()]));
        let empty: Box<dyn Audience> = Box::new(EmptyAudience);
        let outer = ForwardingAudience::new(vec![inner, empty]);

        outer.send_message(&Component::text("deep"));
        assert_eq!(leaf.calls(), vec!["message deep"]);
    }

    #[test]
    fn empty_audience_ignores_everything() {
        let audience = EmptyAudience;
        audience.send_message(&Component::text("ignored"));
        audience.send_tab_view(&TabView::default());
    }
}
