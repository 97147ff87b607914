//! Path families for the extension namespaces.
//!
//! These are relative tables: the dialect tables mount them under whatever
//! parent may carry the extension (RSS channel, RSS item, Atom entry).

/// Dublin Core element set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DublinCorePath {
    Title,
    Creator,
    Subject,
    Description,
    Publisher,
    Contributor,
    Date,
    Type,
    Format,
    Identifier,
    Source,
    Language,
    Relation,
    Coverage,
    Rights,
}

pub const DUBLIN_CORE_PATHS: &[(&str, DublinCorePath)] = &[
    ("dc:title", DublinCorePath::Title),
    ("dc:creator", DublinCorePath::Creator),
    ("dc:subject", DublinCorePath::Subject),
    ("dc:description", DublinCorePath::Description),
    ("dc:publisher", DublinCorePath::Publisher),
    ("dc:contributor", DublinCorePath::Contributor),
    ("dc:date", DublinCorePath::Date),
    ("dc:type", DublinCorePath::Type),
    ("dc:format", DublinCorePath::Format),
    ("dc:identifier", DublinCorePath::Identifier),
    ("dc:source", DublinCorePath::Source),
    ("dc:language", DublinCorePath::Language),
    ("dc:relation", DublinCorePath::Relation),
    ("dc:coverage", DublinCorePath::Coverage),
    ("dc:rights", DublinCorePath::Rights),
];

/// RSS 1.0 Syndication module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyndicationPath {
    UpdatePeriod,
    UpdateFrequency,
    UpdateBase,
}

pub const SYNDICATION_PATHS: &[(&str, SyndicationPath)] = &[
    ("sy:updatePeriod", SyndicationPath::UpdatePeriod),
    ("sy:updateFrequency", SyndicationPath::UpdateFrequency),
    ("sy:updateBase", SyndicationPath::UpdateBase),
];

/// iTunes podcast tags, valid at both channel and item level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ITunesPath {
    Author,
    Block,
    Category,
    Subcategory,
    Image,
    Duration,
    Explicit,
    Complete,
    NewFeedUrl,
    Owner,
    OwnerName,
    OwnerEmail,
    Subtitle,
    Summary,
    Keywords,
    IsClosedCaptioned,
    Order,
    Type,
    EpisodeType,
    Season,
    Episode,
    Title,
}

pub const ITUNES_PATHS: &[(&str, ITunesPath)] = &[
    ("itunes:author", ITunesPath::Author),
    ("itunes:block", ITunesPath::Block),
    ("itunes:category", ITunesPath::Category),
    ("itunes:category/itunes:category", ITunesPath::Subcategory),
    ("itunes:image", ITunesPath::Image),
    ("itunes:duration", ITunesPath::Duration),
    ("itunes:explicit", ITunesPath::Explicit),
    ("itunes:complete", ITunesPath::Complete),
    ("itunes:new-feed-url", ITunesPath::NewFeedUrl),
    ("itunes:owner", ITunesPath::Owner),
    ("itunes:owner/itunes:name", ITunesPath::OwnerName),
    ("itunes:owner/itunes:email", ITunesPath::OwnerEmail),
    ("itunes:subtitle", ITunesPath::Subtitle),
    ("itunes:summary", ITunesPath::Summary),
    ("itunes:keywords", ITunesPath::Keywords),
    ("itunes:isClosedCaptioned", ITunesPath::IsClosedCaptioned),
    ("itunes:order", ITunesPath::Order),
    ("itunes:type", ITunesPath::Type),
    ("itunes:episodeType", ITunesPath::EpisodeType),
    ("itunes:season", ITunesPath::Season),
    ("itunes:episode", ITunesPath::Episode),
    ("itunes:title", ITunesPath::Title),
];

/// Media RSS elements, including the `media:group` sub-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaPath {
    Group,
    GroupContent,
    GroupCredit,
    GroupCategory,
    GroupRating,
    GroupThumbnail,
    GroupTitle,
    GroupDescription,
    GroupKeywords,
    Content,
    Credit,
    Category,
    Rating,
    Keywords,
    Thumbnail,
    Title,
    Description,
    Player,
    Hash,
    Restriction,
    Community,
    CommunityStarRating,
    CommunityStatistics,
    CommunityTags,
    Comments,
    Comment,
    Embed,
    EmbedParam,
    Responses,
    Response,
    BackLinks,
    BackLink,
    Status,
    Price,
    License,
    SubTitle,
    PeerLink,
    Location,
    LocationPosition,
    Rights,
    Scenes,
    Scene,
    SceneTitle,
    SceneDescription,
    SceneStartTime,
    SceneEndTime,
}

pub const MEDIA_PATHS: &[(&str, MediaPath)] = &[
    ("media:group", MediaPath::Group),
    ("media:group/media:content", MediaPath::GroupContent),
    ("media:group/media:credit", MediaPath::GroupCredit),
    ("media:group/media:category", MediaPath::GroupCategory),
    ("media:group/media:rating", MediaPath::GroupRating),
    ("media:group/media:thumbnail", MediaPath::GroupThumbnail),
    ("media:group/media:title", MediaPath::GroupTitle),
    ("media:group/media:description", MediaPath::GroupDescription),
    ("media:group/media:keywords", MediaPath::GroupKeywords),
    ("media:content", MediaPath::Content),
    ("media:credit", MediaPath::Credit),
    ("media:category", MediaPath::Category),
    ("media:rating", MediaPath::Rating),
    ("media:keywords", MediaPath::Keywords),
    ("media:thumbnail", MediaPath::Thumbnail),
    ("media:title", MediaPath::Title),
    ("media:description", MediaPath::Description),
    ("media:player", MediaPath::Player),
    ("media:hash", MediaPath::Hash),
    ("media:restriction", MediaPath::Restriction),
    ("media:community", MediaPath::Community),
    ("media:community/media:starRating", MediaPath::CommunityStarRating),
    ("media:community/media:statistics", MediaPath::CommunityStatistics),
    ("media:community/media:tags", MediaPath::CommunityTags),
    ("media:comments", MediaPath::Comments),
    ("media:comments/media:comment", MediaPath::Comment),
    ("media:embed", MediaPath::Embed),
    ("media:embed/media:param", MediaPath::EmbedParam),
    ("media:responses", MediaPath::Responses),
    ("media:responses/media:response", MediaPath::Response),
    ("media:backLinks", MediaPath::BackLinks),
    ("media:backLinks/media:backLink", MediaPath::BackLink),
    ("media:status", MediaPath::Status),
    ("media:price", MediaPath::Price),
    ("media:license", MediaPath::License),
    ("media:subTitle", MediaPath::SubTitle),
    ("media:peerLink", MediaPath::PeerLink),
    ("media:location", MediaPath::Location),
    (
        "media:location/georss:where/gml:Point/gml:pos",
        MediaPath::LocationPosition,
    ),
    ("media:location/georss:point", MediaPath::LocationPosition),
    ("media:rights", MediaPath::Rights),
    ("media:scenes", MediaPath::Scenes),
    ("media:scenes/media:scene", MediaPath::Scene),
    ("media:scenes/media:scene/media:sceneTitle", MediaPath::SceneTitle),
    (
        "media:scenes/media:scene/media:sceneDescription",
        MediaPath::SceneDescription,
    ),
    (
        "media:scenes/media:scene/media:sceneStartTime",
        MediaPath::SceneStartTime,
    ),
    (
        "media:scenes/media:scene/media:sceneEndTime",
        MediaPath::SceneEndTime,
    ),
];
