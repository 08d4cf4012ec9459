//! Fixed draw.io document constants
//!
//! Canvas metadata, cell style strings, and row geometry. These are
//! configuration of the target editor format, not computed values; the
//! style strings are exact and must not be reformatted.

/// `mxfile` host attribute
pub const FILE_HOST: &str = "Electron";
/// `mxfile` agent attribute
pub const FILE_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) draw.io/24.7.5 Chrome/126.0.6478.183 Electron/31.3.0 Safari/537.36";
/// `mxfile` version attribute
pub const FILE_VERSION: &str = "24.7.5";

/// Fixed id of the single diagram page
pub const PAGE_ID: &str = "C5RBs43oDa-KdzZeNtuy";
/// Name of the single diagram page
pub const PAGE_NAME: &str = "Page-1";

/// `mxGraphModel` canvas attributes, in emission order
pub const CANVAS_ATTRIBUTES: &[(&str, &str)] = &[
    ("dx", "516"),
    ("dy", "494"),
    ("grid", "1"),
    ("gridSize", "10"),
    ("guides", "1"),
    ("tooltips", "1"),
    ("connect", "1"),
    ("arrows", "1"),
    ("fold", "1"),
    ("page", "1"),
    ("pageScale", "1"),
    ("pageWidth", "827"),
    ("pageHeight", "1169"),
    ("math", "0"),
    ("shadow", "0"),
];

/// Class container: a vertically stacking swimlane that grows with its
/// content.
pub const SWIMLANE_STYLE: &str = "swimlane;fontStyle=1;align=center;verticalAlign=top;childLayout=stackLayout;horizontal=1;startSize=26;horizontalStack=0;resizeParent=1;resizeParentMax=0;resizeLast=0;collapsible=1;marginBottom=0;whiteSpace=wrap;html=1;";

/// Member row: a plain text cell spanning the container width.
pub const ROW_STYLE: &str = "text;strokeColor=none;fillColor=none;align=left;verticalAlign=top;spacingLeft=4;spacingRight=4;overflow=hidden;rotatable=0;points=[[0,0.5],[1,0.5]];portConstraint=eastwest;whiteSpace=wrap;html=1;";

/// Separator between the variable and function sections.
pub const SEPARATOR_STYLE: &str = "line;strokeWidth=1;fillColor=none;align=left;verticalAlign=middle;spacingTop=-1;spacingLeft=3;spacingRight=3;rotatable=0;labelPosition=right;points=[];portConstraint=eastwest;strokeColor=inherit;";

/// Container origin and size
pub const BOX_X: u32 = 480;
pub const BOX_Y: u32 = 100;
pub const BOX_WIDTH: u32 = 300;
pub const BOX_HEIGHT: u32 = 500;

/// Swimlane header height; the first row starts below it
pub const HEADER_HEIGHT: u32 = 26;
/// Height of one member row
pub const ROW_HEIGHT: u32 = 26;
/// Height of the section separator
pub const SEPARATOR_HEIGHT: u32 = 8;
