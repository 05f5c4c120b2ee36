use yew::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <header class="bg-[#782F40] text-white px-6 py-4 shadow-lg">
            <div class="max-w-7xl mx-auto flex items-center">
                <div class="flex items-center space-x-4">
                    <div class="w-12 h-12 bg-white rounded-full flex items-center justify-center">
                        <span class="text-[#782F40] font-bold text-xl">{"FSU"}</span>
                    </div>
                    <div>
                        <h1 class="text-2xl font-bold">{"Florida State Football"}</h1>
                        <p class="text-[#CEB888]">{"Player Stats Dashboard"}</p>
                    </div>
                </div>
            </div>
        </header>
    }
}
