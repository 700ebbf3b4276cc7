use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(AttrValue::from("Healthcare Management"))]
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let (badge, title) = if props.compact {
        ("w-10 h-10 text-lg", "text-xl sm:text-2xl")
    } else {
        ("w-14 h-14 text-2xl", "text-3xl md:text-4xl")
    };
    html! {
        <div class="flex items-center gap-3">
            <div class={format!(
                "{badge} bg-gradient-to-br from-green-400 to-green-600 rounded-xl flex items-center \
                 justify-center text-white font-bold shrink-0"
            )}>
                {"✚"}
            </div>
            <div>
                <span class={format!("{title} font-bold text-white")}>{"CarePulse"}</span>
                <p class="text-gray-400 text-xs sm:text-sm mt-1">{&props.subtitle}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SplitLayoutProps {
    pub children: Html,
    /// Gradient classes for the decorative half.
    #[prop_or(AttrValue::from("from-green-900/20 to-blue-900/20"))]
    pub side: AttrValue,
    #[prop_or(AttrValue::from("@carepulse.com • Healthcare made simple"))]
    pub footer: AttrValue,
}

/// The split-screen frame shared by the public pages: form on the left,
/// decorative panel on the right.
#[function_component(SplitLayout)]
pub fn split_layout(props: &SplitLayoutProps) -> Html {
    html! {
        <main class="min-h-screen w-full flex flex-col md:flex-row bg-[#0D0F12]">
            <section class="flex flex-col justify-center text-white w-full md:w-1/2 px-6 sm:px-8 md:px-16 lg:px-24 py-12">
                <div class="max-w-md mx-auto w-full">
                    { props.children.clone() }
                    <div class="mt-16 pt-6 border-t border-gray-800">
                        <p class="text-gray-500 text-sm text-center">{&props.footer}</p>
                    </div>
                </div>
            </section>
            <section class={format!(
                "w-full md:w-1/2 h-80 md:h-auto relative bg-gradient-to-br {}",
                props.side
            )}>
                <div class="absolute inset-0 bg-black/10"></div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-white/10 text-[12rem] select-none">{"✚"}</span>
                </div>
                <div class="absolute inset-0 bg-gradient-to-r from-[#0D0F12] via-transparent to-transparent md:bg-gradient-to-l"></div>
            </section>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortalHeaderProps {
    pub subtitle: AttrValue,
    /// Right-hand side of the bar: welcome text, logout button, etc.
    #[prop_or_default]
    pub children: Html,
}

/// Header bar for the portal pages (intake form, dashboards).
#[function_component(PortalHeader)]
pub fn portal_header(props: &PortalHeaderProps) -> Html {
    html! {
        <header class="border-b border-gray-800 bg-[#11161c]">
            <div class="container mx-auto px-4 sm:px-6 py-4">
                <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-3">
                    <Logo compact=true subtitle={props.subtitle.clone()} />
                    <div class="flex items-center gap-3 sm:gap-4 w-full sm:w-auto justify-between sm:justify-normal">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        </header>
    }
}
