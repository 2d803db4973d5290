use dioxus::prelude::*;
use pagecraft_engine::{Cmd, EditorState, Page, PageFile, Snapshot, io};
use std::path::PathBuf;

const PAGECRAFT_CSS: &str = include_str!("../assets/pagecraft.css");

#[component]
pub fn App(pages_path: PathBuf, autosave: bool) -> Element {
    let mut pages = use_signal(|| match io::list_pages(&pages_path) {
        Ok(pages) => pages,
        Err(e) => {
            eprintln!("Error listing pages: {e}");
            Vec::new()
        }
    });

    let mut selected_page = use_signal(|| None::<PageFile>);
    let mut page_title = use_signal(String::new);
    let mut editor = use_signal(|| None::<EditorState>);
    let mut current_snapshot = use_signal(|| None::<Snapshot>);
    let mut new_page_name = use_signal(String::new);

    let open_page = {
        let pages_path = pages_path.clone();
        move |page_file: PageFile| match io::read_page(page_file.relative_path(), &pages_path) {
            Ok(page) => {
                let state = EditorState::new(page.document);
                *current_snapshot.write() = Some(state.snapshot());
                *editor.write() = Some(state);
                *page_title.write() = page.title;
                *selected_page.write() = Some(page_file);
            }
            Err(e) => {
                eprintln!("Error reading page {:?}: {e}", page_file.relative_path());
            }
        }
    };

    let save_current = {
        let pages_path = pages_path.clone();
        move || {
            let (file, state) = (selected_page.read().clone(), editor.read().clone());
            if let (Some(file), Some(state)) = (file, state) {
                let page = Page {
                    title: page_title.read().clone(),
                    document: state.document().clone(),
                };
                if let Err(e) = io::write_page(file.relative_path(), &pages_path, &page) {
                    eprintln!("Error saving page {:?}: {e}", file.relative_path());
                }
            }
        }
    };

    // Explicit save is only offered when autosave is off.
    let on_save = if autosave {
        None
    } else {
        let save_current = save_current.clone();
        Some(Callback::new(move |()| save_current()))
    };

    rsx! {
        style { {PAGECRAFT_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "Pages" }
                ul {
                    class: "page-list",
                    for page_file in pages.read().iter().cloned() {
                        li {
                            key: "{page_file.relative_path()}",
                            button {
                                class: if selected_page.read().as_ref() == Some(&page_file) {
                                    "page-entry selected"
                                } else {
                                    "page-entry"
                                },
                                onclick: {
                                    let mut open_page = open_page.clone();
                                    let page_file = page_file.clone();
                                    move |_| open_page(page_file.clone())
                                },
                                "{page_file.display_name()}"
                            }
                        }
                    }
                }
                div {
                    class: "new-page",
                    input {
                        r#type: "text",
                        placeholder: "New page name",
                        value: new_page_name.read().clone(),
                        oninput: move |event: Event<FormData>| {
                            new_page_name.set(event.value());
                        },
                    }
                    button {
                        onclick: {
                            let pages_path = pages_path.clone();
                            let mut open_page = open_page.clone();
                            move |_| {
                                let name = new_page_name.read().trim().to_string();
                                if name.is_empty() {
                                    return;
                                }
                                let page_file = PageFile::from_relative_str(&format!("{name}.json"));
                                let page = Page::new(name.clone());
                                match io::write_page(page_file.relative_path(), &pages_path, &page) {
                                    Ok(()) => {
                                        new_page_name.set(String::new());
                                        match io::list_pages(&pages_path) {
                                            Ok(listed) => *pages.write() = listed,
                                            Err(e) => eprintln!("Error listing pages: {e}"),
                                        }
                                        open_page(page_file);
                                    }
                                    Err(e) => {
                                        eprintln!("Error creating page '{name}': {e}");
                                    }
                                }
                            }
                        },
                        "Create"
                    }
                }
            }
            div {
                class: "main-content",
                if let (Some(_file), Some(snapshot)) = (
                    selected_page.read().as_ref(),
                    current_snapshot.read().as_ref()
                ) {
                    super::components::PageEditor {
                        title: page_title.read().clone(),
                        snapshot: snapshot.clone(),
                        on_title_change: {
                            let save_current = save_current.clone();
                            Callback::new(move |title: String| {
                                *page_title.write() = title;
                                if autosave {
                                    save_current();
                                }
                            })
                        },
                        on_command: {
                            let save_current = save_current.clone();
                            Callback::new(move |cmd: Cmd| {
                                let state = editor.read().clone();
                                if let Some(mut state) = state {
                                    let patch = state.apply(cmd.clone());
                                    if patch.changed.is_empty() {
                                        log::warn!("Command matched no block: {cmd:?}");
                                    }
                                    *current_snapshot.write() = Some(state.snapshot());
                                    *editor.write() = Some(state);
                                    if autosave {
                                        save_current();
                                    }
                                }
                            })
                        },
                        on_save,
                    }
                } else {
                    div {
                        class: "welcome",
                        h1 { "pagecraft" }
                        p { "Select a page from the sidebar to start editing" }
                    }
                }
            }
        }
    }
}
