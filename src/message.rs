//! Message model: characters and the three renderable message variants.
//!
//! A [`Message`] is a closed sum type, so a value built through the typed
//! constructors always carries exactly the fields its variant mandates
//! (2 for character speech, 1 for system and story text). The historical raw
//! representation (format tag + field vector) survives as the fallible
//! [`Message::from_parts`] boundary, where field-count and unknown-tag
//! violations surface as errors instead of aborting the process.

use crate::error::{Result, WrzeczakError};
use crate::render::session::ColorSlot;
use ratatui::style::Color;

/// Format tag for character speech in the raw message representation.
pub const CHARACTER_MESSAGE_TAG: u8 = 64;
/// Format tag for system notices in the raw message representation.
pub const SYSTEM_MESSAGE_TAG: u8 = 65;
/// Format tag for narrative text in the raw message representation.
pub const STORY_MESSAGE_TAG: u8 = 66;

/// A speaking character: display name, session-unique id, and its color.
///
/// The id maps deterministically to a reserved color slot (`16 + id`), so two
/// characters in one session must not share an id or their slots alias.
/// Characters own a copy of their name; messages copy it again, so a
/// character may be dropped once all messages quoting it are constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    id: u16,
    color: Color,
    slot: ColorSlot,
}

impl Character {
    /// Create a character and derive its reserved color slot from `id`.
    pub fn new(name: impl Into<String>, id: u16, color: Color) -> Self {
        Self {
            name: name.into(),
            id,
            color,
            slot: ColorSlot::for_character(id),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    /// Terminal color this character speaks in.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Reserved color slot derived from the character id.
    pub fn slot(&self) -> ColorSlot {
        self.slot
    }

    /// Register this character's color slot with the session.
    pub fn register(
        &self,
        session: &mut dyn crate::render::session::TerminalSession,
        background: Color,
    ) -> Result<()> {
        session.register_color_slot(self.slot, self.color, background)
    }
}

/// Variant tag for a [`Message`], carrying the per-variant field contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Speech attributed to a character: speaker name + body.
    Character,
    /// A system notice rendered with the fixed `SYSTEM:` prefix.
    System,
    /// Narrative text rendered with a trailing ellipsis and emphasis.
    Story,
}

impl MessageKind {
    /// Resolve a raw format tag, rejecting tags outside the implemented set.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            CHARACTER_MESSAGE_TAG => Ok(Self::Character),
            SYSTEM_MESSAGE_TAG => Ok(Self::System),
            STORY_MESSAGE_TAG => Ok(Self::Story),
            _ => Err(WrzeczakError::UnknownFormat { tag }),
        }
    }

    /// Raw format tag for this variant.
    pub fn tag(self) -> u8 {
        match self {
            Self::Character => CHARACTER_MESSAGE_TAG,
            Self::System => SYSTEM_MESSAGE_TAG,
            Self::Story => STORY_MESSAGE_TAG,
        }
    }

    /// Number of text fields this variant mandates.
    pub fn expected_field_count(self) -> usize {
        match self {
            Self::Character => 2,
            Self::System | Self::Story => 1,
        }
    }
}

/// A renderable dialogue message.
///
/// Messages own independent copies of their text, so constructing one never
/// borrows from the character or caller buffers. Rendering consumes the
/// message by value; the move is what makes a second render of the same
/// message a compile error rather than a use-after-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// `<speaker> "body"` drawn in the speaker's color slot.
    Character {
        speaker: String,
        speaker_slot: ColorSlot,
        body: String,
    },
    /// `SYSTEM: body` drawn in the reserved system slot.
    System { body: String },
    /// `body... ` drawn in the default text slot with emphasis.
    Story { body: String },
}

impl Message {
    /// Build character speech, copying the speaker's name and color slot.
    pub fn character(speaker: &Character, body: impl Into<String>) -> Self {
        Self::Character {
            speaker: speaker.name().to_string(),
            speaker_slot: speaker.slot(),
            body: body.into(),
        }
    }

    /// Build a system notice.
    pub fn system(body: impl Into<String>) -> Self {
        Self::System { body: body.into() }
    }

    /// Build narrative text.
    pub fn story(body: impl Into<String>) -> Self {
        Self::Story { body: body.into() }
    }

    /// Reassemble a message from its raw representation.
    ///
    /// Enforces the field count mandated by the tag's variant: a mismatch is
    /// the construction-contract violation, an unrecognized tag the
    /// unknown-format violation. `slots` carries the speaker slot for
    /// character messages and is ignored otherwise.
    pub fn from_parts(tag: u8, mut fields: Vec<String>, slots: &[ColorSlot]) -> Result<Self> {
        let kind = MessageKind::from_tag(tag)?;
        let expected = kind.expected_field_count();
        if fields.len() != expected {
            return Err(WrzeczakError::MalformedMessage {
                kind,
                expected,
                actual: fields.len(),
            });
        }

        Ok(match kind {
            MessageKind::Character => {
                let body = fields.pop().unwrap_or_default();
                let speaker = fields.pop().unwrap_or_default();
                Self::Character {
                    speaker,
                    speaker_slot: slots.first().copied().unwrap_or(ColorSlot::DEFAULT_TEXT),
                    body,
                }
            }
            MessageKind::System => Self::System {
                body: fields.pop().unwrap_or_default(),
            },
            MessageKind::Story => Self::Story {
                body: fields.pop().unwrap_or_default(),
            },
        })
    }

    /// Variant tag of this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Character { .. } => MessageKind::Character,
            Self::System { .. } => MessageKind::System,
            Self::Story { .. } => MessageKind::Story,
        }
    }

    /// Number of text fields actually present.
    ///
    /// Constructor postcondition: always equals
    /// `self.kind().expected_field_count()`.
    pub fn field_count(&self) -> usize {
        match self {
            Self::Character { .. } => 2,
            Self::System { .. } | Self::Story { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_character_slot_derivation() {
        let c = Character::new("Test", 0, Color::Red);
        assert_eq!(c.slot(), ColorSlot::for_character(0));
        assert_eq!(c.slot().id(), 16);

        let d = Character::new("Other", 7, Color::Green);
        assert_eq!(d.slot().id(), 23);
        assert_ne!(c.slot(), d.slot());
    }

    #[test]
    fn test_character_message_copies_speaker() {
        let c = Character::new("Test", 0, Color::Red);
        let message = Message::character(&c, "This is a test message");
        drop(c);

        match message {
            Message::Character {
                speaker,
                speaker_slot,
                body,
            } => {
                assert_eq!(speaker, "Test");
                assert_eq!(speaker_slot, ColorSlot::for_character(0));
                assert_eq!(body, "This is a test message");
            }
            _ => panic!("Expected Character variant"),
        }
    }

    #[test]
    fn test_field_count_matches_kind() {
        let c = Character::new("Test", 0, Color::Red);

        let speech = Message::character(&c, "hi");
        assert_eq!(speech.kind(), MessageKind::Character);
        assert_eq!(speech.field_count(), 2);
        assert_eq!(
            speech.field_count(),
            speech.kind().expected_field_count()
        );

        let system = Message::system("notice");
        assert_eq!(system.kind(), MessageKind::System);
        assert_eq!(system.field_count(), 1);

        let story = Message::story("once upon a time");
        assert_eq!(story.kind(), MessageKind::Story);
        assert_eq!(story.field_count(), 1);
    }

    #[test]
    fn test_from_parts_valid() {
        let slots = [ColorSlot::for_character(3)];
        let message = Message::from_parts(
            CHARACTER_MESSAGE_TAG,
            vec!["Test".to_string(), "hello".to_string()],
            &slots,
        )
        .unwrap();
        assert_eq!(
            message,
            Message::Character {
                speaker: "Test".to_string(),
                speaker_slot: ColorSlot::for_character(3),
                body: "hello".to_string(),
            }
        );

        let system = Message::from_parts(SYSTEM_MESSAGE_TAG, vec!["up".to_string()], &[]).unwrap();
        assert_eq!(system, Message::system("up"));

        let story = Message::from_parts(STORY_MESSAGE_TAG, vec!["end".to_string()], &[]).unwrap();
        assert_eq!(story, Message::story("end"));
    }

    #[test]
    fn test_from_parts_wrong_field_count() {
        let err = Message::from_parts(CHARACTER_MESSAGE_TAG, vec!["only-body".to_string()], &[])
            .unwrap_err();
        match err {
            WrzeczakError::MalformedMessage {
                kind,
                expected,
                actual,
            } => {
                assert_eq!(kind, MessageKind::Character);
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            _ => panic!("Expected MalformedMessage"),
        }
        let err = Message::from_parts(
            SYSTEM_MESSAGE_TAG,
            vec!["a".to_string(), "b".to_string()],
            &[],
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::MALFORMED_MESSAGE_CODE);
    }

    #[test]
    fn test_from_parts_unknown_tag() {
        let err = Message::from_parts(0, vec!["x".to_string()], &[]).unwrap_err();
        match err {
            WrzeczakError::UnknownFormat { tag } => assert_eq!(tag, 0),
            _ => panic!("Expected UnknownFormat"),
        }
        assert_eq!(err.exit_code(), crate::error::UNKNOWN_FORMAT_CODE);
    }

    #[test]
    fn test_kind_tag_round_trip() {
        for kind in [MessageKind::Character, MessageKind::System, MessageKind::Story] {
            assert_eq!(MessageKind::from_tag(kind.tag()).unwrap(), kind);
        }
    }

    proptest! {
        #[test]
        fn prop_slot_derivation_is_offset_by_sixteen(id in 0u16..=200) {
            let c = Character::new("p", id, Color::Blue);
            prop_assert_eq!(u32::from(c.slot().id()), 16 + u32::from(id));
        }

        #[test]
        fn prop_distinct_ids_never_alias_slots(a in 0u16..=200, b in 0u16..=200) {
            prop_assume!(a != b);
            prop_assert_ne!(ColorSlot::for_character(a), ColorSlot::for_character(b));
        }

        #[test]
        fn prop_from_parts_rejects_any_wrong_count(extra in 0usize..5) {
            prop_assume!(extra != 1);
            let fields = vec!["f".to_string(); extra];
            let result = Message::from_parts(SYSTEM_MESSAGE_TAG, fields, &[]);
            prop_assert!(
                matches!(
                    result,
                    Err(WrzeczakError::MalformedMessage { actual, .. }) if actual == extra
                ),
                "expected MalformedMessage with actual == {}, got {:?}",
                extra,
                result
            );
        }
    }
}
