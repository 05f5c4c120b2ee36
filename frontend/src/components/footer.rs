use yew::prelude::*;

// Links are placeholders until the athletics site sections exist.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-[#782F40] text-white mt-12 py-8">
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex flex-col items-center">
                    <div class="space-x-6 mb-6">
                        <a href="#" class="text-[#CEB888] hover:underline">{"Team Roster"}</a>
                        <a href="#" class="text-[#CEB888] hover:underline">{"Schedule"}</a>
                        <a href="#" class="text-[#CEB888] hover:underline">{"News"}</a>
                        <a href="#" class="text-[#CEB888] hover:underline">{"About"}</a>
                        <a href="#" class="text-[#CEB888] hover:underline">{"Contact"}</a>
                    </div>
                    <div class="text-sm text-gray-300">
                        {"© 2025 Florida State University Athletics. All Rights Reserved."}
                    </div>
                </div>
            </div>
        </footer>
    }
}
