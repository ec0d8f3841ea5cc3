use std::rc::Rc;

use yew::prelude::*;

use crate::model::GalleryItem;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryGridProps {
    pub items: Rc<Vec<GalleryItem>>,
    pub on_open: Callback<usize>,
}

#[function_component(GalleryGrid)]
pub fn gallery_grid(props: &GalleryGridProps) -> Html {
    if props.items.is_empty() {
        return html! { <div class="muted" style="padding:16px; opacity:0.7;">{"No public artworks yet."}</div> };
    }
    html! {
        <div id="publicGallery" style="display:grid; grid-template-columns:repeat(auto-fill, minmax(160px, 1fr)); gap:10px; padding:12px;">
            { for props.items.iter().enumerate().map(|(i, art)| {
                let on_open = props.on_open.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_open.emit(i));
                html! {
                    <div key={art.id.to_string()} class="thumb" style="cursor:pointer; aspect-ratio:1; overflow:hidden; border-radius:8px; background:#161b22;" {onclick}>
                        <img src={art.image_src().to_string()} alt={art.alt_text().to_string()}
                            style="width:100%; height:100%; object-fit:cover;" />
                    </div>
                }
            }) }
        </div>
    }
}
