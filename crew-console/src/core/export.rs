//! Print/export view
//!
//! Renders the currently visible subset as a standalone printable HTML
//! document: one table row per employee plus a footer count. Pure over its
//! input; writing the file is the only side effect.

use shared::models::Employee;
use std::io;
use std::path::{Path, PathBuf};

/// Render the print document for the given (already filtered) employees
pub fn render_html(employees: &[&Employee]) -> String {
    let mut rows = String::new();
    for emp in employees {
        let portrait = match &emp.image {
            Some(data_url) => format!(
                r#"<img src="{}" alt="{}" />"#,
                data_url,
                escape(&emp.name)
            ),
            None => "N/A".to_string(),
        };
        rows.push_str(&format!(
            "<tr>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             </tr>\n",
            emp.id,
            portrait,
            escape(&emp.name),
            emp.gender,
            emp.dob.format("%b %-d, %Y"),
            escape(&emp.state),
            if emp.active { "Active" } else { "Inactive" },
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Employees List</title>
    <style>
      body {{ font-family: Arial, sans-serif; padding: 20px; }}
      h1 {{ text-align: center; color: #111827; }}
      table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
      th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
      th {{ background-color: #004A8F; color: white; }}
      tr:nth-child(even) {{ background-color: #f9fafb; }}
      img {{ width: 50px; height: 50px; border-radius: 50%; object-fit: cover; }}
    </style>
  </head>
  <body>
    <h1>Employees List</h1>
    <table>
      <thead>
        <tr>
          <th>ID</th>
          <th>Profile</th>
          <th>Full Name</th>
          <th>Gender</th>
          <th>Date of Birth</th>
          <th>State</th>
          <th>Status</th>
        </tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>
    <p style="margin-top: 20px; text-align: center; color: #6b7280;">
      Total Employees: {count}
    </p>
  </body>
</html>
"#,
        rows = rows,
        count = employees.len(),
    )
}

/// Write the print document to `dir`, returning the file path
pub fn write_print_view(dir: &Path, employees: &[&Employee]) -> io::Result<PathBuf> {
    let filename = format!(
        "employees-{}.html",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(filename);
    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, render_html(employees))?;
    Ok(path)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::Gender;

    fn emp(id: i64, name: &str, active: bool) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            gender: Gender::Female,
            dob: NaiveDate::from_ymd_opt(1994, 6, 2).unwrap(),
            state: "Kerala".to_string(),
            active,
            image: None,
        }
    }

    #[test]
    fn renders_a_row_per_employee_and_the_footer_count() {
        let a = emp(1, "Anna", true);
        let b = emp(2, "Bob", false);
        let html = render_html(&[&a, &b]);

        assert_eq!(html.matches("<tr><td>").count(), 2);
        assert!(html.contains("Anna"));
        assert!(html.contains("Jun 2, 1994"));
        assert!(html.contains("<td>Active</td>"));
        assert!(html.contains("<td>Inactive</td>"));
        assert!(html.contains("Total Employees: 2"));
    }

    #[test]
    fn missing_portrait_renders_as_na() {
        let a = emp(1, "Anna", true);
        let html = render_html(&[&a]);
        assert!(html.contains("<td>N/A</td>"));
    }

    #[test]
    fn escapes_html_in_names() {
        let a = emp(1, "<script>alert(1)</script>", true);
        let html = render_html(&[&a]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn writes_the_document_to_the_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let a = emp(1, "Anna", true);
        let path = write_print_view(dir.path(), &[&a]).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("Employees List"));
    }
}
