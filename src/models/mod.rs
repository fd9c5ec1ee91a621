pub mod choice;
pub mod draft;
pub mod loaders;
pub mod post;

pub use choice::{choice_key, choice_label, Choice, ChoiceList, MAX_CHOICES, MIN_CHOICES};
pub use draft::{assemble_post, ImageDraft, NewPost, PostAuthor, QuestionBody, QuestionDraft};
pub use loaders::{load_all_draft_files, load_draft_file, DraftFile};
pub use post::{Author, Comment, Post, PostQuestion};
