use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-users"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M9 7m-4 0a4 4 0 1 0 8 0a4 4 0 1 0 -8 0" {}
                      path d="M3 21v-2a4 4 0 0 1 4 -4h4a4 4 0 0 1 4 4v2" {}
                  }
                  h3 { "Resident Registry" }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/admin/review" { "Review Queue" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #111827; background: #f9fafb; }
header { display: flex; gap: 1rem; align-items: center; padding: 0.75rem 1.5rem; background: white; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header ul { list-style: none; display: flex; gap: 1rem; margin: 0; padding: 0; }
.container { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
.card { background: white; border-radius: 8px; padding: 1rem 1.25rem; box-shadow: 0 1px 2px rgba(0,0,0,.06); }
.summary { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin-bottom: 2rem; }
.summary .count { font-size: 1.8rem; font-weight: 600; }
.badge { padding: 2px 8px; border-radius: 9999px; font-size: 0.8em; font-weight: 600; }
.badge-active { background: #d1fae5; color: #065f46; }
.badge-inactive { background: #e5e7eb; color: #374151; }
.badge-for_review { background: #fef3c7; color: #92400e; }
.badge-deceased { background: #1f2937; color: #f9fafb; }
.badge-relocated { background: #dbeafe; color: #1e40af; }
.banner { padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.banner-error { background: #fee2e2; color: #991b1b; }
.banner-success { background: #d1fae5; color: #065f46; }
.modal-backdrop { position: fixed; inset: 0; background: rgba(17,24,39,.5); display: flex; align-items: center; justify-content: center; }
.modal { background: white; border-radius: 8px; padding: 1.5rem; width: 480px; max-width: 90vw; }
"#;
