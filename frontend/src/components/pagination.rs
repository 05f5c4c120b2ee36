use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub label: String,
    pub has_previous: bool,
    pub has_next: bool,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    html! {
        <div class="flex justify-center mt-6 space-x-2">
            <button
                onclick={props.on_previous.clone()}
                disabled={!props.has_previous}
                class="w-9 h-9 flex items-center justify-center border border-gray-300 rounded-md disabled:opacity-50"
            >
                {"«"}
            </button>

            <span class="px-4 py-2 text-[#782F40] font-medium">
                {&props.label}
            </span>

            <button
                onclick={props.on_next.clone()}
                disabled={!props.has_next}
                class="w-9 h-9 flex items-center justify-center border border-gray-300 rounded-md disabled:opacity-50"
            >
                {"»"}
            </button>
        </div>
    }
}
