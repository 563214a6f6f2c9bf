//! The remote action catalogue
//!
//! Each action carries its wire name, the shape its result must have and the
//! decision table that turns `false`/`null` results into domain failures.

use serde_json::Value;

use crate::shape::{numeric_id, Shape};

/// How a well-formed result is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ActionFailed,
    NotFound { kind: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Version,
    // Profiles and collection
    GetProfiles,
    LoadProfile,
    Sync,
    ReloadCollection,
    ImportPackage,
    ExportPackage,
    // Models
    ModelNames,
    ModelFieldNames,
    ModelStyling,
    ModelTemplates,
    UpdateModelStyling,
    UpdateModelTemplates,
    CreateModel,
    // Media
    StoreMediaFile,
    RetrieveMediaFile,
    DeleteMediaFile,
    // Decks
    DeckNames,
    CreateDeck,
    ChangeDeck,
    DeleteDecks,
    GetDeckConfig,
    SetDeckConfigId,
    SaveDeckConfig,
    CloneDeckConfigId,
    RemoveDeckConfigId,
    // Cards
    GetEaseFactors,
    SetEaseFactors,
    Suspend,
    Unsuspend,
    AreSuspended,
    AreDue,
    GetIntervals,
    FindCards,
    CardsInfo,
    // Reviews
    GetNumCardsReviewedToday,
    CardReviews,
    GetLatestReviewId,
    InsertReviews,
    // GUI
    GuiBrowse,
    GuiAddCards,
    GuiCurrentCard,
    GuiShowQuestion,
    GuiShowAnswer,
    GuiAnswerCard,
    GuiExitAnki,
    // Notes
    AddNote,
    UpdateNoteFields,
    AddTags,
    RemoveTags,
    GetTags,
    FindNotes,
    NotesInfo,
    DeleteNotes,
}

impl Action {
    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Version => "version",
            Action::GetProfiles => "getProfiles",
            Action::LoadProfile => "loadProfile",
            Action::Sync => "sync",
            Action::ReloadCollection => "reloadCollection",
            Action::ImportPackage => "importPackage",
            Action::ExportPackage => "exportPackage",
            Action::ModelNames => "modelNames",
            Action::ModelFieldNames => "modelFieldNames",
            Action::ModelStyling => "modelStyling",
            Action::ModelTemplates => "modelTemplates",
            Action::UpdateModelStyling => "updateModelStyling",
            Action::UpdateModelTemplates => "updateModelTemplates",
            Action::CreateModel => "createModel",
            Action::StoreMediaFile => "storeMediaFile",
            Action::RetrieveMediaFile => "retrieveMediaFile",
            Action::DeleteMediaFile => "deleteMediaFile",
            Action::DeckNames => "deckNames",
            Action::CreateDeck => "createDeck",
            Action::ChangeDeck => "changeDeck",
            Action::DeleteDecks => "deleteDecks",
            Action::GetDeckConfig => "getDeckConfig",
            Action::SetDeckConfigId => "setDeckConfigId",
            Action::SaveDeckConfig => "saveDeckConfig",
            Action::CloneDeckConfigId => "cloneDeckConfigId",
            Action::RemoveDeckConfigId => "removeDeckConfigId",
            Action::GetEaseFactors => "getEaseFactors",
            Action::SetEaseFactors => "setEaseFactors",
            Action::Suspend => "suspend",
            Action::Unsuspend => "unsuspend",
            Action::AreSuspended => "areSuspended",
            Action::AreDue => "areDue",
            Action::GetIntervals => "getIntervals",
            Action::FindCards => "findCards",
            Action::CardsInfo => "cardsInfo",
            Action::GetNumCardsReviewedToday => "getNumCardsReviewedToday",
            Action::CardReviews => "cardReviews",
            Action::GetLatestReviewId => "getLatestReviewID",
            Action::InsertReviews => "insertReviews",
            Action::GuiBrowse => "guiBrowse",
            Action::GuiAddCards => "guiAddCards",
            Action::GuiCurrentCard => "guiCurrentCard",
            Action::GuiShowQuestion => "guiShowQuestion",
            Action::GuiShowAnswer => "guiShowAnswer",
            Action::GuiAnswerCard => "guiAnswerCard",
            Action::GuiExitAnki => "guiExitAnki",
            Action::AddNote => "addNote",
            Action::UpdateNoteFields => "updateNoteFields",
            Action::AddTags => "addTags",
            Action::RemoveTags => "removeTags",
            Action::GetTags => "getTags",
            Action::FindNotes => "findNotes",
            Action::NotesInfo => "notesInfo",
            Action::DeleteNotes => "deleteNotes",
        }
    }

    /// Shape the result must have before it is interpreted
    pub fn shape(&self) -> Shape {
        match self {
            Action::Version
            | Action::CloneDeckConfigId
            | Action::GetNumCardsReviewedToday
            | Action::GetLatestReviewId
            | Action::GuiAddCards => Shape::Int,

            Action::GetProfiles
            | Action::ModelNames
            | Action::ModelFieldNames
            | Action::DeckNames
            | Action::GetTags => Shape::array_of(Shape::String),

            Action::FindCards
            | Action::FindNotes
            | Action::GuiBrowse => Shape::array_of(Shape::Int),
            Action::SetEaseFactors => Shape::array_of(Shape::Bool),
            // Unknown cards come back as null slots
            Action::GetEaseFactors => {
                Shape::array_of(Shape::AnyOf(vec![Shape::Int, Shape::Null]))
            }
            Action::AreSuspended | Action::AreDue => {
                Shape::array_of(Shape::AnyOf(vec![Shape::Bool, Shape::Null]))
            }
            Action::GetIntervals => Shape::array_of(Shape::array_of(Shape::Int)),
            Action::CardsInfo => info_entries("cardId"),
            Action::NotesInfo => info_entries("noteId"),
            Action::CardReviews => Shape::array_of(Shape::array_of(Shape::Int)),

            Action::LoadProfile
            | Action::ImportPackage
            | Action::ExportPackage
            | Action::SetDeckConfigId
            | Action::SaveDeckConfig
            | Action::RemoveDeckConfigId
            | Action::GuiShowQuestion
            | Action::GuiShowAnswer
            | Action::GuiAnswerCard => Shape::Bool,

            // Older bridges answer null, newer ones report whether anything changed
            Action::Suspend | Action::Unsuspend => Shape::AnyOf(vec![Shape::Null, Shape::Bool]),

            Action::Sync
            | Action::ReloadCollection
            | Action::UpdateModelStyling
            | Action::UpdateModelTemplates
            | Action::StoreMediaFile
            | Action::DeleteMediaFile
            | Action::ChangeDeck
            | Action::DeleteDecks
            | Action::InsertReviews
            | Action::GuiExitAnki
            | Action::UpdateNoteFields
            | Action::AddTags
            | Action::RemoveTags
            | Action::DeleteNotes => Shape::Null,

            Action::ModelStyling => Shape::object_with("css", Shape::String),
            Action::ModelTemplates => Shape::object_of(Shape::object_with("Front", Shape::String)),
            Action::CreateModel => Shape::object_with("id", Shape::Numeric),
            Action::CreateDeck => Shape::Numeric,
            Action::GetDeckConfig => Shape::object_with("id", Shape::Int),
            Action::RetrieveMediaFile => {
                Shape::AnyOf(vec![Shape::String, Shape::Literal(Value::Bool(false))])
            }
            Action::GuiCurrentCard => Shape::AnyOf(vec![Shape::Object, Shape::Null]),
            Action::AddNote => Shape::AnyOf(vec![Shape::Int, Shape::Null]),
        }
    }

    /// Interpret a result that already matched [`Action::shape`]
    pub fn outcome(&self, result: &Value) -> Outcome {
        match (self, result) {
            (
                Action::LoadProfile
                | Action::ImportPackage
                | Action::ExportPackage
                | Action::SetDeckConfigId
                | Action::SaveDeckConfig
                | Action::RemoveDeckConfigId
                | Action::GuiShowQuestion
                | Action::GuiShowAnswer
                | Action::GuiAnswerCard,
                Value::Bool(false),
            ) => Outcome::ActionFailed,

            (Action::RetrieveMediaFile, Value::Bool(false)) => {
                Outcome::NotFound { kind: "Media file" }
            }

            (Action::AddNote, Value::Null) => Outcome::ActionFailed,
            (Action::AddNote, id) if numeric_id(id) == Some(0) => Outcome::ActionFailed,

            _ => Outcome::Success,
        }
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Info objects carrying `id_field`, or `{}` for IDs the remote does not know
fn info_entries(id_field: &'static str) -> Shape {
    Shape::array_of(Shape::AnyOf(vec![
        Shape::object_with(id_field, Shape::Int),
        Shape::Literal(Value::Object(Default::default())),
    ]))
}
