//! Printable results sheet. The renderer consumes plain rows that were
//! fetched before it runs; it never touches the database.

use printpdf::{
    BuiltinFont, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point,
};
use storage::models::{Child, Coach, Competition, CompetitionResult, Group};

// Letter, in millimeters; printpdf units are f32
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const BOTTOM_MARGIN: f32 = 20.0;
const ROW_STEP: f32 = 6.0;

const COLUMN_X: [f32; 10] = [
    10.0, 45.0, 85.0, 118.0, 143.0, 153.0, 163.0, 173.0, 183.0, 195.0,
];
const HEADERS: [&str; 10] = [
    "Name",
    "Surname",
    "Birthday",
    "Participated",
    "C1",
    "C2",
    "C3",
    "C4",
    "C5",
    "Sum",
];

/// Render the score sheet for one competition. Every child of the group gets
/// a row; children without a result keep their score columns blank so the
/// sheet can be filled in by hand.
pub fn render_results_pdf(
    competition: &Competition,
    group: &Group,
    coach: &Coach,
    children: &[Child],
    results: &[CompetitionResult],
) -> Result<Vec<u8>, printpdf::Error> {
    let (doc, page, layer) = PdfDocument::new(
        "Gymnastics Competition Results",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(page).get_layer(layer);

    layer.use_text(
        "Gymnastics Competition Results",
        16.0,
        Mm(20.0),
        Mm(PAGE_HEIGHT - 20.0),
        &bold,
    );
    layer.use_text(
        format!("Competition Date: {}", competition.date),
        12.0,
        Mm(20.0),
        Mm(PAGE_HEIGHT - 28.0),
        &regular,
    );
    layer.use_text(
        format!("Group: {}", group.name),
        12.0,
        Mm(20.0),
        Mm(PAGE_HEIGHT - 35.0),
        &regular,
    );
    layer.use_text(
        format!("Referee/Coach: {} {}", coach.name, coach.surname),
        12.0,
        Mm(20.0),
        Mm(PAGE_HEIGHT - 42.0),
        &regular,
    );

    let mut y = PAGE_HEIGHT - 55.0;
    for (header, x) in HEADERS.iter().zip(COLUMN_X) {
        layer.use_text(*header, 10.0, Mm(x), Mm(y), &bold);
    }
    layer.set_outline_thickness(0.5);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(10.0), Mm(y - 1.5)), false),
            (Point::new(Mm(PAGE_WIDTH - 10.0), Mm(y - 1.5)), false),
        ],
        is_closed: false,
    });
    y -= ROW_STEP;

    for child in children {
        let result = results.iter().find(|r| r.child_id == child.id);
        let row = row_cells(child, result);

        for (value, x) in row.iter().zip(COLUMN_X) {
            if !value.is_empty() {
                layer.use_text(value.clone(), 10.0, Mm(x), Mm(y), &regular);
            }
        }

        y -= ROW_STEP;
        if y < BOTTOM_MARGIN {
            layer = add_page(&doc);
            y = PAGE_HEIGHT - 20.0;
        }
    }

    doc.save_to_bytes()
}

fn add_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    doc.get_page(page).get_layer(layer)
}

fn row_cells(child: &Child, result: Option<&CompetitionResult>) -> [String; 10] {
    match result {
        Some(r) => [
            child.name.clone(),
            child.surname.clone(),
            child.birthday.to_string(),
            if r.participated { "Yes" } else { "No" }.to_string(),
            r.criteria1.to_string(),
            r.criteria2.to_string(),
            r.criteria3.to_string(),
            r.criteria4.to_string(),
            r.criteria5.to_string(),
            r.total().to_string(),
        ],
        None => [
            child.name.clone(),
            child.surname.clone(),
            child.birthday.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixtures() -> (Competition, Group, Coach, Vec<Child>) {
        let competition = Competition {
            id: 1,
            date: NaiveDate::from_ymd_opt(2026, 5, 17).unwrap(),
            group_id: 1,
            coach_id: 1,
        };
        let group = Group {
            id: 1,
            name: "Juniors".to_string(),
            coach_id: 1,
        };
        let coach = Coach {
            id: 1,
            username: "anna".to_string(),
            name: "Anna".to_string(),
            surname: "Petrova".to_string(),
            birthday: NaiveDate::from_ymd_opt(1985, 3, 2).unwrap(),
            level: "National".to_string(),
            password_hash: String::new(),
        };
        let children = vec![
            Child {
                id: 1,
                name: "Mia".to_string(),
                surname: "Ivanova".to_string(),
                birthday: NaiveDate::from_ymd_opt(2015, 7, 1).unwrap(),
                group_id: 1,
            },
            Child {
                id: 2,
                name: "Lena".to_string(),
                surname: "Koleva".to_string(),
                birthday: NaiveDate::from_ymd_opt(2014, 1, 20).unwrap(),
                group_id: 1,
            },
        ];
        (competition, group, coach, children)
    }

    #[test]
    fn test_renders_with_results() {
        let (competition, group, coach, children) = fixtures();
        let results = vec![CompetitionResult {
            id: 1,
            competition_id: 1,
            child_id: 1,
            participated: true,
            criteria1: 10,
            criteria2: 10,
            criteria3: 10,
            criteria4: 10,
            criteria5: 10,
        }];

        let bytes = render_results_pdf(&competition, &group, &coach, &children, &results).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_renders_without_any_results() {
        // Every child still gets a row; score columns stay blank.
        let (competition, group, coach, children) = fixtures();
        let bytes = render_results_pdf(&competition, &group, &coach, &children, &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_renders_multiple_pages_for_large_roster() {
        let (competition, group, coach, _) = fixtures();
        let children: Vec<Child> = (1..=80)
            .map(|i| Child {
                id: i,
                name: format!("Child{i}"),
                surname: format!("Surname{i}"),
                birthday: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
                group_id: 1,
            })
            .collect();

        let bytes = render_results_pdf(&competition, &group, &coach, &children, &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_blank_row_for_child_without_result() {
        let (_, _, _, children) = fixtures();
        let cells = row_cells(&children[0], None);
        assert_eq!(cells[0], "Mia");
        assert!(cells[3..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_row_includes_score_sum() {
        let (_, _, _, children) = fixtures();
        let result = CompetitionResult {
            id: 1,
            competition_id: 1,
            child_id: 1,
            participated: false,
            criteria1: 1,
            criteria2: 2,
            criteria3: 3,
            criteria4: 4,
            criteria5: 5,
        };
        let cells = row_cells(&children[0], Some(&result));
        assert_eq!(cells[3], "No");
        assert_eq!(cells[9], "15");
    }
}
