mod accordion;
mod add_block_menu;
mod article_grid;
mod block_frame;
mod block_view;
mod booking;
mod chat;
mod comparison;
mod contact;
mod cta;
mod cta_form;
mod decoration_form;
mod editor_panel;
mod error_screen;
mod features;
mod form_block;
mod gallery;
mod hero;
mod hero_form;
mod image_block;
mod image_form;
mod info_box;
mod json_form;
mod link_grid;
mod logos;
mod map_block;
mod newsletter;
mod page_editor;
mod popup;
mod pricing;
mod quote_block;
mod quote_form;
mod separator;
mod stats;
mod team;
mod testimonials;
mod text_block;
mod text_form;
mod two_column;
mod unknown_block;
mod youtube;
mod youtube_form;

pub use accordion::Accordion;
pub use add_block_menu::AddBlockMenu;
pub use article_grid::ArticleGrid;
pub use block_frame::BlockFrame;
pub use block_view::BlockPreview;
pub use booking::Booking;
pub use chat::Chat;
pub use comparison::Comparison;
pub use contact::Contact;
pub use cta::Cta;
pub use cta_form::CtaForm;
pub use decoration_form::DecorationForm;
pub use editor_panel::EditorPanel;
pub use error_screen::ErrorScreen;
pub use features::Features;
pub use form_block::FormBlock;
pub use gallery::Gallery;
pub use hero::Hero;
pub use hero_form::HeroForm;
pub use image_block::ImageBlock;
pub use image_form::ImageForm;
pub use info_box::InfoBox;
pub use json_form::JsonForm;
pub use link_grid::LinkGrid;
pub use logos::Logos;
pub use map_block::MapBlock;
pub use newsletter::Newsletter;
pub use page_editor::PageEditor;
pub use popup::Popup;
pub use pricing::Pricing;
pub use quote_block::QuoteBlock;
pub use quote_form::QuoteForm;
pub use separator::Separator;
pub use stats::Stats;
pub use team::Team;
pub use testimonials::Testimonials;
pub use text_block::TextBlock;
pub use text_form::TextForm;
pub use two_column::TwoColumn;
pub use unknown_block::UnknownBlock;
pub use youtube::Youtube;
pub use youtube_form::YoutubeForm;
